use std::io::{Read, Write};

use super::{CatalogError, MessageCatalog, push_fragments};
use crate::model::Message;

/// `key=value` property files with `{0}`-style message-format placeholders.
///
/// This reads the common subset of the Java properties syntax: one
/// `key=value` pair per line, blank lines and `#`/`!` comment lines
/// skipped. Line continuations and escape sequences are not interpreted.
pub struct Properties;

impl MessageCatalog for Properties {
    fn read_from(&self, reader: &mut dyn Read) -> Result<Vec<Message>, CatalogError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        let mut messages = Vec::new();
        for (number, line) in raw.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(CatalogError::Parse {
                    line: number + 1,
                    message: "missing '=' separator".to_string(),
                });
            };
            let mut message = Message::empty().with_id(key.trim_end());
            push_fragments(&mut message, value, find_message_format_arg);
            messages.push(message);
        }
        Ok(messages)
    }

    fn write_to(&self, writer: &mut dyn Write, messages: &[Message]) -> Result<(), CatalogError> {
        for message in messages {
            writeln!(
                writer,
                "{}={}",
                message.id().unwrap_or(""),
                message.flatten()
            )?;
        }
        Ok(())
    }
}

/// Finds the next `{n}` or `{n,format...}` argument.
fn find_message_format_arg(text: &str) -> Option<(usize, usize)> {
    let mut search = 0;
    while let Some(offset) = text[search..].find('{') {
        let start = search + offset;
        let rest = &text[start + 1..];
        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0 {
            if let Some(close) = rest.find('}') {
                let detail = &rest[digits..close];
                if detail.is_empty() || detail.starts_with(',') {
                    return Some((start, close + 2));
                }
            }
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
        Properties.read_from(&mut input.as_bytes()).unwrap()
    }

    #[test]
    fn keys_and_values_are_split() {
        let messages = read("greeting=Hello\nfarewell=Bye\n");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].id(), Some("greeting"));
        assert_eq!(messages[0].flatten(), "Hello");
        assert_eq!(messages[1].id(), Some("farewell"));
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let messages = read("# comment\n\n! also comment\nkey=value\n");
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn placeholders_become_placeholder_fragments() {
        let messages = read("m=Hello {0}, you have {1,number} items\n");
        let message = &messages[0];
        let placeholders: Vec<&str> = message
            .root()
            .iter()
            .filter_map(|id| match message.fragment(*id) {
                Fragment::Placeholder(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(placeholders, vec!["{0}", "{1,number}"]);
        assert_eq!(message.flatten(), "Hello {0}, you have {1,number} items");
    }

    #[test]
    fn braces_without_digits_are_plain_text() {
        let messages = read("m=set {a, b} and {}\n");
        assert_eq!(messages[0].root().len(), 1);
    }

    #[test]
    fn missing_separator_is_a_parse_error() {
        let error = Properties
            .read_from(&mut "just a line\n".as_bytes())
            .unwrap_err();
        assert!(matches!(error, CatalogError::Parse { line: 1, .. }));
    }

    #[test]
    fn write_round_trips() {
        let messages = read("a=x {0} y\nb=plain\n");
        let mut out = Vec::new();
        Properties.write_to(&mut out, &messages).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a=x {0} y\nb=plain\n");
    }
}
