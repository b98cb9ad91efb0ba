//! Input format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Container format of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Office Open XML word processing document (ZIP container)
    Docx,
    /// UTF-8 text, one paragraph per line
    PlainText,
}

impl DocumentFormat {
    /// Name of the reader that handles this format.
    pub fn reader_name(&self) -> &'static str {
        match self {
            DocumentFormat::Docx => "docx",
            DocumentFormat::PlainText => "text",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Docx => write!(f, "DOCX"),
            DocumentFormat::PlainText => write!(f, "plain text"),
        }
    }
}

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Bytes inspected when sniffing a file on disk.
const SNIFF_LEN: u64 = 4096;

/// Detect the document format from a file path.
///
/// # Returns
/// * `Ok(DocumentFormat)` if the file is DOCX or UTF-8 text
/// * `Err(Error::InputNotFound)` if the path does not exist
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocumentFormat> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let mut head = Vec::new();
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut head)?;
    detect_format_from_bytes(&head)
}

/// Detect the document format from leading bytes.
///
/// Text detection tolerates a multi-byte character cut off at the end of
/// the slice, so callers may pass a truncated head of a larger file.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocumentFormat> {
    if data.is_empty() {
        return Err(Error::UnknownFormat);
    }

    if data.starts_with(ZIP_MAGIC) {
        return Ok(DocumentFormat::Docx);
    }

    match std::str::from_utf8(data) {
        Ok(_) => Ok(DocumentFormat::PlainText),
        // error_len() is None when the input merely ends mid-character
        Err(e) if e.error_len().is_none() => Ok(DocumentFormat::PlainText),
        Err(_) => Err(Error::UnknownFormat),
    }
}
