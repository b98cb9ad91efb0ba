//! Error types for citecheck library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for citecheck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading and checking a document.
///
/// Only failures to obtain document text are errors. Unparseable citations
/// and reference lines are reported as diagnostics in the check result.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not point to an existing file.
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file content is neither a DOCX container nor UTF-8 text.
    #[error("Unknown file format: not a DOCX or plain text document")]
    UnknownFormat,

    /// No reader is registered for the file extension.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The DOCX container is damaged or lacks a required part.
    #[error("Invalid document container: {0}")]
    InvalidContainer(String),

    /// Malformed WordprocessingML.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// Error during rendering (report, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => {
                Error::InvalidContainer("missing archive entry".to_string())
            }
            _ => Error::InvalidContainer(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
