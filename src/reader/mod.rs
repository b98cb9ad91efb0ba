//! Document readers turning input files into the [`Document`] model.
//!
//! Readers are registered by file extension. When the extension is missing
//! or unknown, the registry sniffs the content and picks the reader for the
//! detected format.
//!
//! # Example
//!
//! ```no_run
//! use citecheck::reader::ReaderRegistry;
//! use std::path::Path;
//!
//! fn main() -> citecheck::Result<()> {
//!     let registry = ReaderRegistry::with_defaults();
//!     let doc = registry.read(Path::new("thesis.docx"))?;
//!     println!("{} paragraphs", doc.paragraph_count());
//!     Ok(())
//! }
//! ```

mod docx;
mod text;

pub use docx::DocxReader;
pub use text::PlainTextReader;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::Document;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for document readers.
///
/// Implement this trait to add support for a new input format.
pub trait DocumentReader: Send + Sync {
    /// Get the supported file extensions for this reader.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["docx"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this reader.
    fn name(&self) -> &str;

    /// Read a file at the given path.
    fn read(&self, path: &Path) -> Result<Document> {
        if !path.is_file() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }
        let bytes = std::fs::read(path)?;
        self.read_bytes(&bytes)
    }

    /// Read from bytes.
    fn read_bytes(&self, bytes: &[u8]) -> Result<Document>;

    /// Check if this reader supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for document readers.
pub struct ReaderRegistry {
    readers: HashMap<String, Arc<dyn DocumentReader>>,
    by_name: HashMap<String, Arc<dyn DocumentReader>>,
}

impl ReaderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            readers: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the DOCX and plain text readers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DocxReader::new()));
        registry.register(Arc::new(PlainTextReader::new()));
        registry
    }

    /// Register a reader for all its supported extensions.
    pub fn register(&mut self, reader: Arc<dyn DocumentReader>) {
        for ext in reader.supported_extensions() {
            self.readers.insert(ext.to_lowercase(), reader.clone());
        }
        self.by_name.insert(reader.name().to_lowercase(), reader);
    }

    /// Get a reader by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentReader>> {
        self.readers.get(&ext.to_lowercase()).cloned()
    }

    /// Get a reader by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentReader>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.readers.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.readers.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Read a file using the reader for its extension, or the reader for
    /// its sniffed format when the extension is not registered.
    pub fn read(&self, path: &Path) -> Result<Document> {
        if !path.is_file() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }

        let by_ext = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| self.get_by_extension(ext));

        let reader = match by_ext {
            Some(reader) => reader,
            None => {
                let format = detect_format_from_path(path)?;
                log::debug!("{}: no reader for extension, detected {}", path.display(), format);
                self.get_by_name(format.reader_name())
                    .ok_or_else(|| Error::UnsupportedFormat(format.to_string()))?
            }
        };

        log::info!("Reading {} with {} reader", path.display(), reader.name());
        reader.read(path)
    }

    /// Read bytes using the reader for the sniffed format.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<Document> {
        let format = detect_format_from_bytes(bytes)?;
        let reader = self
            .get_by_name(format.reader_name())
            .ok_or_else(|| Error::UnsupportedFormat(format.to_string()))?;
        reader.read_bytes(bytes)
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
