//! Tables found in the document body.

use serde::{Deserialize, Serialize};

/// A top-level table. Nested tables are not represented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in document order
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &TableCell> + '_ {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }
}

/// One `w:tr` row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells from left to right
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a row from its cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Build a row of single-paragraph cells.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Cell texts separated by tabs.
    pub fn plain_text(&self) -> String {
        let texts: Vec<String> = self.cells.iter().map(TableCell::plain_text).collect();
        texts.join("\t")
    }
}

/// One `w:tc` cell holding the texts of its paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Texts of the paragraphs inside the cell
    pub paragraphs: Vec<String>,
}

impl TableCell {
    /// Create a cell holding one paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![text.into()],
        }
    }

    /// Create a cell without paragraphs.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a cell from its paragraph texts.
    pub fn with_paragraphs(paragraphs: Vec<String>) -> Self {
        Self { paragraphs }
    }

    /// Cell text as a single block, one line per paragraph.
    pub fn plain_text(&self) -> String {
        self.paragraphs.join("\n")
    }

    /// True when every paragraph is blank.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.trim().is_empty())
    }
}
