use std::io::{Read, Write};

use super::{CatalogError, MessageCatalog, push_fragments};
use crate::model::Message;

/// Apple `.strings` tables: `"KEY" = "value";` lines with printf-style
/// placeholders (`%d`, `%@`, `%1$d`, ...).
///
/// Lines that do not match the entry shape (comments, blanks) are skipped.
pub struct Strings;

impl MessageCatalog for Strings {
    fn read_from(&self, reader: &mut dyn Read) -> Result<Vec<Message>, CatalogError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        let mut messages = Vec::new();
        for line in raw.lines() {
            let Some((key, value)) = parse_entry(line) else {
                continue;
            };
            let mut message = Message::empty().with_id(key);
            push_fragments(&mut message, value, find_printf_arg);
            messages.push(message);
        }
        Ok(messages)
    }

    fn write_to(&self, writer: &mut dyn Write, messages: &[Message]) -> Result<(), CatalogError> {
        for message in messages {
            writeln!(
                writer,
                "\"{}\" = \"{}\";",
                message.id().unwrap_or(""),
                message.flatten()
            )?;
        }
        Ok(())
    }
}

/// Parses one `"KEY" = "value";` line, or `None` if the line is not an
/// entry.
fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim().strip_prefix('"')?;
    let (key, rest) = rest.split_once('"')?;
    let rest = rest.trim_start().strip_prefix('=')?;
    let rest = rest.trim_start().strip_prefix('"')?;
    let rest = rest.strip_suffix(';')?;
    let value = rest.strip_suffix('"')?;
    Some((key, value))
}

/// Finds the next `%(\d+\$)?(\d+)?[idf@%]` formatter.
fn find_printf_arg(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut search = 0;
    while let Some(offset) = text[search..].find('%') {
        let start = search + offset;
        let mut pos = start + 1;
        let digits_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos > digits_start && pos < bytes.len() && bytes[pos] == b'$' {
            pos += 1;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
        if pos < bytes.len() && matches!(bytes[pos], b'i' | b'd' | b'f' | b'@' | b'%') {
            return Some((start, pos + 1 - start));
        }
        search = start + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fragment;

    fn read(input: &str) -> Vec<Message> {
        Strings.read_from(&mut input.as_bytes()).unwrap()
    }

    #[test]
    fn entries_are_parsed() {
        let messages = read("\"HELLO\" = \"Hello!\";\n// note\n\n\"BYE\" = \"Bye\";\n");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].id(), Some("HELLO"));
        assert_eq!(messages[0].flatten(), "Hello!");
    }

    #[test]
    fn printf_args_become_placeholders() {
        let messages = read("\"K\" = \"You ran %1$d of %d km at %f%%, %@\";\n");
        let message = &messages[0];
        let placeholders: Vec<&str> = message
            .root()
            .iter()
            .filter_map(|id| match message.fragment(*id) {
                Fragment::Placeholder(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(placeholders, vec!["%1$d", "%d", "%f", "%%", "%@"]);
    }

    #[test]
    fn stray_percent_is_plain_text() {
        let messages = read("\"K\" = \"100% done\";\n");
        assert_eq!(messages[0].root().len(), 1);
    }

    #[test]
    fn write_round_trips() {
        let input = "\"A\" = \"x %d y\";\n\"B\" = \"plain\";\n";
        let messages = read(input);
        let mut out = Vec::new();
        Strings.write_to(&mut out, &messages).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), input);
    }
}
