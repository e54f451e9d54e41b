//! Message catalogs: reading resource files into messages and writing the
//! localized messages back out.
//!
//! A catalog implements the read/write contract the pipeline is built
//! around: parsing splits format-specific placeholder syntax into
//! [`Placeholder`](crate::model::Fragment::Placeholder) fragments so no
//! method can damage it, and serialization flattens each processed message
//! back into native syntax.

mod properties;
mod strings;

use std::collections::BTreeMap;
use std::io::{Read, Write};

use thiserror::Error;

pub use properties::Properties;
pub use strings::Strings;

use crate::model::Message;

/// An error reading or writing a message catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// One resource-file syntax.
///
/// Reading produces messages whose placeholder syntax has been split into
/// placeholder fragments; writing flattens each message's final fragment
/// sequence back into the native syntax.
pub trait MessageCatalog {
    fn read_from(&self, reader: &mut dyn Read) -> Result<Vec<Message>, CatalogError>;

    fn write_to(&self, writer: &mut dyn Write, messages: &[Message]) -> Result<(), CatalogError>;
}

/// Fallback catalog treating the entire file as one message with no
/// identifier and no placeholders.
pub struct MessagePerFile;

impl MessageCatalog for MessagePerFile {
    fn read_from(&self, reader: &mut dyn Read) -> Result<Vec<Message>, CatalogError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Ok(vec![Message::new(raw)])
    }

    fn write_to(&self, writer: &mut dyn Write, messages: &[Message]) -> Result<(), CatalogError> {
        for message in messages {
            writer.write_all(message.flatten().as_bytes())?;
        }
        Ok(())
    }
}

/// Extension-to-catalog registry.
///
/// Unknown extensions fall back to [`MessagePerFile`], so any file can be
/// processed even if nothing structured is known about it.
pub struct FormatRegistry {
    formats: BTreeMap<String, fn() -> Box<dyn MessageCatalog>>,
}

impl FormatRegistry {
    /// A registry with no formats at all.
    pub fn empty() -> FormatRegistry {
        FormatRegistry {
            formats: BTreeMap::new(),
        }
    }

    /// Registers a catalog factory for a file extension.
    pub fn register(&mut self, extension: &str, factory: fn() -> Box<dyn MessageCatalog>) {
        self.formats
            .insert(extension.to_ascii_lowercase(), factory);
    }

    /// The catalog to use for a file extension.
    pub fn catalog_for(&self, extension: &str) -> Box<dyn MessageCatalog> {
        match self.formats.get(&extension.to_ascii_lowercase()) {
            Some(factory) => factory(),
            None => Box::new(MessagePerFile),
        }
    }

    /// The registered extensions, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(String::as_str)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        let mut registry = FormatRegistry::empty();
        registry.register("properties", || Box::new(Properties));
        registry.register("strings", || Box::new(Strings));
        registry
    }
}

/// Splits `text` into text and placeholder fragments appended to `message`.
/// `find` returns the byte offset and length of the next placeholder in the
/// slice it is given.
pub(crate) fn push_fragments(
    message: &mut Message,
    text: &str,
    find: impl Fn(&str) -> Option<(usize, usize)>,
) {
    let mut rest = text;
    while let Some((start, len)) = find(rest) {
        if start > 0 {
            message.push_text(&rest[..start]);
        }
        message.push_placeholder(&rest[start..start + len]);
        rest = &rest[start + len..];
    }
    if !rest.is_empty() {
        message.push_text(rest);
    }
}
