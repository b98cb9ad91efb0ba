//! Check options and configuration.

/// Heading keywords that open a reference list.
///
/// Matched as lower-case substrings of a paragraph, so "References",
/// "REFERENCE LIST" and "7. Bibliography" all qualify.
pub const DEFAULT_HEADING_KEYWORDS: &[&str] = &[
    "references",
    "reference",
    "bibliography",
    "literature cited",
    "works cited",
    "参考文献",
    "參考文獻",
    "文献",
    "文獻",
];

/// Options for checking a document.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Lower-case keywords identifying the reference list heading
    pub heading_keywords: Vec<String>,

    /// Whether table cells are scanned for in-text citations
    pub include_tables: bool,

    /// Normalize text blocks to Unicode NFC before scanning
    pub normalize_unicode: bool,
}

impl CheckOptions {
    /// Create new check options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the heading keyword list.
    pub fn with_heading_keywords<S: AsRef<str>>(
        mut self,
        keywords: impl IntoIterator<Item = S>,
    ) -> Self {
        self.heading_keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Add one heading keyword to the list.
    pub fn add_heading_keyword(mut self, keyword: impl AsRef<str>) -> Self {
        let keyword = keyword.as_ref().to_lowercase();
        if !keyword.is_empty() && !self.heading_keywords.contains(&keyword) {
            self.heading_keywords.push(keyword);
        }
        self
    }

    /// Enable or disable scanning of table cells.
    pub fn with_tables(mut self, include: bool) -> Self {
        self.include_tables = include;
        self
    }

    /// Scan body paragraphs only.
    pub fn without_tables(mut self) -> Self {
        self.include_tables = false;
        self
    }

    /// Enable or disable Unicode normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            heading_keywords: DEFAULT_HEADING_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            include_tables: true,
            normalize_unicode: true,
        }
    }
}
