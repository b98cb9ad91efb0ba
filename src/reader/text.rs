//! Plain text reader.

use crate::error::{Error, Result};
use crate::model::Document;

use super::DocumentReader;

/// Reader for UTF-8 text files.
///
/// Every line becomes one paragraph, so a reference list exported with one
/// entry per line is located the same way as in a word processing file.
#[derive(Debug, Clone, Default)]
pub struct PlainTextReader {
    _private: (),
}

impl PlainTextReader {
    /// Create a new plain text reader.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentReader for PlainTextReader {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text", "md"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn read_bytes(&self, bytes: &[u8]) -> Result<Document> {
        let text = std::str::from_utf8(bytes).map_err(|_| Error::UnknownFormat)?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Ok(Document::from_paragraphs(text.lines()))
    }
}
