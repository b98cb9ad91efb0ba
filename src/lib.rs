//! # citecheck
//!
//! Consistency checker for name-year citations.
//!
//! This library reads a manuscript, collects its parenthetical in-text
//! citations such as `(Duer et al., 1992; Luo, 2022)`, locates the
//! reference list, and reports cited works that have no reference entry as
//! well as reference entries that are never cited.
//!
//! ## Quick Start
//!
//! ```no_run
//! use citecheck::{check_file, render};
//!
//! fn main() -> citecheck::Result<()> {
//!     let report = check_file("thesis.docx")?;
//!
//!     let text = render::to_report(&report, &render::ReportOptions::default());
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Matching
//!
//! Citations and references are compared by key: the lower-cased surname
//! of the first author plus the year, including a disambiguation suffix
//! (`smith|2020a`). Matching is exact; there is no fuzzy comparison.

pub mod check;
pub mod citation;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod options;
pub mod reader;
pub mod reconcile;
pub mod references;
pub mod render;

// Re-export commonly used types
pub use check::{check_document, CheckReport};
pub use citation::{build_citation_index, scan_candidates, CitationIndex, CitationKey};
pub use detect::{detect_format_from_bytes, detect_format_from_path, DocumentFormat};
pub use error::{Error, Result};
pub use model::{Document, Table, TableCell, TableRow};
pub use normalize::{normalize_author, NormalizeRule};
pub use options::{CheckOptions, DEFAULT_HEADING_KEYWORDS};
pub use reader::{DocumentReader, DocxReader, PlainTextReader, ReaderRegistry};
pub use reconcile::{reconcile, Reconciliation, Verdict};
pub use references::{
    locate_reference_list, parse_reference_entries, ReferenceEntry, ReferenceList, SkipReason,
    SkippedLine,
};
pub use render::{JsonFormat, ReportOptions};

use std::path::Path;

/// Read a document file into the document model.
///
/// # Example
///
/// ```no_run
/// use citecheck::read_file;
///
/// let doc = read_file("thesis.docx").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    ReaderRegistry::with_defaults().read(path.as_ref())
}

/// Check a document file with default options.
///
/// # Example
///
/// ```no_run
/// use citecheck::{check_file, Verdict};
///
/// let report = check_file("thesis.docx").unwrap();
/// if report.verdict() == Verdict::Inconsistent {
///     eprintln!("{} citations lack a reference", report.reconciliation.unwrap().missing_count());
/// }
/// ```
pub fn check_file<P: AsRef<Path>>(path: P) -> Result<CheckReport> {
    check_file_with_options(path, &CheckOptions::default())
}

/// Check a document file with custom options.
pub fn check_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &CheckOptions,
) -> Result<CheckReport> {
    let path = path.as_ref();
    let doc = ReaderRegistry::with_defaults().read(path)?;
    Ok(check_document(&doc, &path.display().to_string(), options))
}

/// Check a document held in memory. The format is detected from the bytes.
pub fn check_bytes(data: &[u8], source: &str) -> Result<CheckReport> {
    let doc = ReaderRegistry::with_defaults().read_bytes(data)?;
    Ok(check_document(&doc, source, &CheckOptions::default()))
}

/// Extract the flattened text that is scanned for citations.
///
/// # Example
///
/// ```no_run
/// use citecheck::extract_text;
///
/// let text = extract_text("thesis.docx").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = read_file(path)?;
    Ok(extract::extract_text(&doc, &CheckOptions::default()))
}

/// Builder for checking documents.
///
/// # Example
///
/// ```no_run
/// use citecheck::CiteCheck;
///
/// let report = CiteCheck::new()
///     .with_heading_keyword("Literaturverzeichnis")
///     .without_tables()
///     .with_citations_path("thesis_citations.txt")
///     .check("thesis.docx")?
///     .to_report();
/// # Ok::<(), citecheck::Error>(())
/// ```
pub struct CiteCheck {
    check_options: CheckOptions,
    report_options: ReportOptions,
    registry: ReaderRegistry,
}

impl CiteCheck {
    /// Create a new CiteCheck builder.
    pub fn new() -> Self {
        Self {
            check_options: CheckOptions::default(),
            report_options: ReportOptions::default(),
            registry: ReaderRegistry::with_defaults(),
        }
    }

    /// Replace the check options.
    pub fn with_options(mut self, options: CheckOptions) -> Self {
        self.check_options = options;
        self
    }

    /// Add a reference list heading keyword.
    pub fn with_heading_keyword(mut self, keyword: impl AsRef<str>) -> Self {
        self.check_options = self.check_options.add_heading_keyword(keyword);
        self
    }

    /// Scan body paragraphs only.
    pub fn without_tables(mut self) -> Self {
        self.check_options = self.check_options.without_tables();
        self
    }

    /// Mention the saved citation list in the report.
    pub fn with_citations_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.report_options = self.report_options.with_citations_path(path);
        self
    }

    /// List skipped reference lines in the report.
    pub fn with_skipped_lines(mut self) -> Self {
        self.report_options = self.report_options.with_skipped_lines(true);
        self
    }

    /// Use a custom reader registry.
    pub fn with_registry(mut self, registry: ReaderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Check a document file.
    pub fn check<P: AsRef<Path>>(self, path: P) -> Result<CiteCheckResult> {
        let path = path.as_ref();
        let doc = self.registry.read(path)?;
        Ok(self.finish(&doc, &path.display().to_string()))
    }

    /// Check a document already in memory.
    pub fn check_document(self, doc: &Document, source: &str) -> CiteCheckResult {
        self.finish(doc, source)
    }

    fn finish(self, doc: &Document, source: &str) -> CiteCheckResult {
        CiteCheckResult {
            report: check_document(doc, source, &self.check_options),
            report_options: self.report_options,
        }
    }
}

impl Default for CiteCheck {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of checking a document.
pub struct CiteCheckResult {
    /// The check findings
    pub report: CheckReport,
    /// Report options to use
    report_options: ReportOptions,
}

impl CiteCheckResult {
    /// Render the text report.
    pub fn to_report(&self) -> String {
        render::to_report(&self.report, &self.report_options)
    }

    /// Render the citation list.
    pub fn to_citation_list(&self) -> String {
        render::to_citation_list(&self.report)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.report, format)
    }

    /// Overall verdict.
    pub fn verdict(&self) -> Verdict {
        self.report.verdict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citecheck_builder() {
        let builder = CiteCheck::new()
            .with_heading_keyword("Quellen")
            .without_tables()
            .with_skipped_lines();

        assert!(builder
            .check_options
            .heading_keywords
            .contains(&"quellen".to_string()));
        assert!(!builder.check_options.include_tables);
        assert!(builder.report_options.list_skipped);
    }

    #[test]
    fn test_citecheck_builder_default() {
        let builder = CiteCheck::default();
        assert!(builder.check_options.include_tables);
        assert!(builder.report_options.citations_path.is_none());
    }

    #[test]
    fn test_check_document_via_builder() {
        let doc = Document::from_paragraphs([
            "Body (Luo, 2022).",
            "Quellen",
            "Luo, X. (2022). Title.",
        ]);
        let result = CiteCheck::new()
            .with_options(CheckOptions::new().with_heading_keywords(["quellen"]))
            .check_document(&doc, "memo.txt");

        assert_eq!(result.verdict(), Verdict::Consistent);
        assert!(result.to_report().contains("Input file: memo.txt"));
        assert_eq!(result.to_citation_list(), "Luo, 2022\n2022\n");
    }

    #[test]
    fn test_check_bytes_plain_text() {
        let data = "Body (Luo, 2022).\nReferences\nLuo, X. (2021). Title.".as_bytes();
        let report = check_bytes(data, "memo.txt").unwrap();
        assert_eq!(report.verdict(), Verdict::Inconsistent);
    }

    #[test]
    fn test_check_bytes_empty() {
        assert!(matches!(check_bytes(&[], "empty"), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_check_file_missing() {
        let result = check_file("/nonexistent/thesis.docx");
        assert!(matches!(result, Err(Error::InputNotFound(_))));
    }
}
