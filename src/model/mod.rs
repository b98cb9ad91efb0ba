//! Document model types.
//!
//! The model is the flattened view of a word processing document that the
//! checker needs: body paragraphs in reading order and the tables that sit
//! between them. Formatting is not retained.

mod document;
mod table;

pub use document::Document;
pub use table::{Table, TableCell, TableRow};
