//! Document-level types.

use super::{Table, TableCell};
use serde::{Deserialize, Serialize};

/// A document reduced to its text structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Body paragraphs in reading order (table content excluded)
    pub paragraphs: Vec<String>,

    /// Top-level tables in document order
    pub tables: Vec<Table>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from body paragraphs.
    pub fn from_paragraphs<S: Into<String>>(paragraphs: impl IntoIterator<Item = S>) -> Self {
        Self {
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
            tables: Vec::new(),
        }
    }

    /// Add a body paragraph.
    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        self.paragraphs.push(text.into());
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Get the number of body paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has no paragraphs and no tables.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }

    /// Iterate over the text blocks of the document.
    ///
    /// Non-empty paragraphs come first in reading order, followed by
    /// non-empty table cells, row-major within each table.
    pub fn text_blocks(&self) -> impl Iterator<Item = String> + '_ {
        let paragraphs = self.paragraphs.iter().cloned();
        let cells = self
            .tables
            .iter()
            .flat_map(Table::cells)
            .map(TableCell::plain_text);

        paragraphs.chain(cells).filter(|text| !text.is_empty())
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.text_blocks().collect::<Vec<_>>().join("\n")
    }
}
