//! Report rendering options.

use std::path::PathBuf;

/// Options for rendering the text report.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Where the citation list was saved, mentioned in the report
    pub citations_path: Option<PathBuf>,

    /// List every skipped reference line instead of only counting them
    pub list_skipped: bool,
}

impl ReportOptions {
    /// Create new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the location of the saved citation list.
    pub fn with_citations_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.citations_path = Some(path.into());
        self
    }

    /// Enable or disable listing of skipped reference lines.
    pub fn with_skipped_lines(mut self, list: bool) -> Self {
        self.list_skipped = list;
        self
    }
}
