//! DOCX reader.
//!
//! DOCX files are ZIP archives containing XML files in Open XML format.
//! The body text lives in `word/document.xml`: paragraphs (`w:p`) made of
//! runs (`w:r`) holding text (`w:t`), and tables (`w:tbl`) made of rows
//! (`w:tr`) and cells (`w:tc`) that in turn hold paragraphs.

use crate::error::{Error, Result};
use crate::model::{Document, Table, TableCell, TableRow};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read, Seek};
use zip::ZipArchive;

use super::DocumentReader;

/// Archive entry holding the main document body.
const DOCUMENT_PART: &str = "word/document.xml";

/// Reader for Word `.docx` documents.
#[derive(Debug, Clone, Default)]
pub struct DocxReader {
    _private: (),
}

impl DocxReader {
    /// Create a new DOCX reader.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn read_document_part<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<String> {
        let mut file = archive
            .by_name(DOCUMENT_PART)
            .map_err(|_| Error::InvalidContainer(format!("missing {}", DOCUMENT_PART)))?;

        let mut xml = String::new();
        file.read_to_string(&mut xml)?;
        Ok(xml)
    }
}

impl DocumentReader for DocxReader {
    fn supported_extensions(&self) -> &[&str] {
        &["docx", "docm"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn read_bytes(&self, bytes: &[u8]) -> Result<Document> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let xml = Self::read_document_part(&mut archive)?;
        let doc = parse_document_xml(&xml)?;
        log::debug!(
            "DOCX body: {} paragraphs, {} tables",
            doc.paragraphs.len(),
            doc.tables.len()
        );
        Ok(doc)
    }
}

/// Parse a WordprocessingML body into paragraphs and tables.
pub(crate) fn parse_document_xml(xml: &str) -> Result<Document> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut body = BodyBuilder::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => body.start(e.local_name().as_ref()),
            Event::End(e) => body.end(e.local_name().as_ref()),
            Event::Empty(e) => body.empty(e.local_name().as_ref()),
            Event::Text(e) if body.wants_text() => {
                let text = e.unescape()?;
                body.paragraph.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(body.doc)
}

/// Containers whose text never reaches the body text.
fn is_skipped_container(name: &[u8]) -> bool {
    matches!(name, b"txbxContent" | b"oMath" | b"oMathPara")
}

/// Incremental state while walking the body XML.
#[derive(Default)]
struct BodyBuilder {
    doc: Document,
    paragraph: String,
    in_paragraph: bool,
    run_depth: usize,
    in_text: bool,
    table: Option<Table>,
    row: Option<TableRow>,
    cell: Option<TableCell>,
    // nesting depth inside text boxes, equations and nested tables
    skip_depth: usize,
}

impl BodyBuilder {
    fn wants_text(&self) -> bool {
        self.in_text && self.skip_depth == 0
    }

    fn start(&mut self, name: &[u8]) {
        if self.skip_depth > 0 {
            if is_skipped_container(name) || name == b"tbl" {
                self.skip_depth += 1;
            }
            return;
        }

        match name {
            b"tbl" if self.table.is_some() => self.skip_depth += 1,
            b"tbl" => self.table = Some(Table::new()),
            b"tr" if self.table.is_some() => self.row = Some(TableRow::default()),
            b"tc" if self.row.is_some() => self.cell = Some(TableCell::empty()),
            b"p" => {
                self.in_paragraph = true;
                self.paragraph.clear();
            }
            b"r" => self.run_depth += 1,
            b"t" if self.run_depth > 0 => self.in_text = true,
            name if is_skipped_container(name) => self.skip_depth += 1,
            _ => {}
        }
    }

    fn end(&mut self, name: &[u8]) {
        if self.skip_depth > 0 {
            if is_skipped_container(name) || name == b"tbl" {
                self.skip_depth -= 1;
            }
            return;
        }

        match name {
            b"t" => self.in_text = false,
            b"r" => self.run_depth = self.run_depth.saturating_sub(1),
            b"p" => self.finish_paragraph(),
            b"tc" => {
                if let (Some(row), Some(cell)) = (self.row.as_mut(), self.cell.take()) {
                    row.cells.push(cell);
                }
            }
            b"tr" => {
                if let (Some(table), Some(row)) = (self.table.as_mut(), self.row.take()) {
                    table.add_row(row);
                }
            }
            b"tbl" => {
                if let Some(table) = self.table.take() {
                    self.doc.add_table(table);
                }
            }
            _ => {}
        }
    }

    fn empty(&mut self, name: &[u8]) {
        if self.skip_depth > 0 {
            return;
        }

        match name {
            b"p" => {
                self.in_paragraph = true;
                self.paragraph.clear();
                self.finish_paragraph();
            }
            b"tc" => {
                if let Some(row) = self.row.as_mut() {
                    row.cells.push(TableCell::empty());
                }
            }
            b"tab" if self.run_depth > 0 => self.paragraph.push('\t'),
            b"br" | b"cr" if self.run_depth > 0 => self.paragraph.push('\n'),
            b"noBreakHyphen" if self.run_depth > 0 => self.paragraph.push('-'),
            _ => {}
        }
    }

    fn finish_paragraph(&mut self) {
        if !self.in_paragraph {
            return;
        }
        self.in_paragraph = false;
        self.run_depth = 0;
        self.in_text = false;

        let text = std::mem::take(&mut self.paragraph);
        if let Some(cell) = self.cell.as_mut() {
            cell.paragraphs.push(text);
        } else if self.table.is_none() {
            self.doc.add_paragraph(text);
        }
    }
}
