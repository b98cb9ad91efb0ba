//! Integration tests for the reader module.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use std::sync::Arc;

use citecheck::error::{Error, Result};
use citecheck::{
    detect_format_from_bytes, detect_format_from_path, read_file, DocumentFormat, DocumentReader,
    Document, DocxReader, PlainTextReader, ReaderRegistry,
};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Introduction</w:t></w:r></w:p>
    <w:p>
      <w:r><w:t xml:space="preserve">Earlier work </w:t></w:r>
      <w:ins w:id="1"><w:r><w:t>(Duer et al., 1992)</w:t></w:r></w:ins>
      <w:del w:id="2"><w:r><w:delText>(Removed, 2001)</w:delText></w:r></w:del>
      <w:r><w:t xml:space="preserve"> shows this.</w:t></w:r>
    </w:p>
    <w:tbl>
      <w:tr>
        <w:tc><w:p><w:r><w:t>Model</w:t></w:r></w:p></w:tc>
        <w:tc><w:p><w:r><w:t>Source</w:t></w:r></w:p></w:tc>
      </w:tr>
      <w:tr>
        <w:tc><w:p><w:r><w:t>A</w:t></w:r></w:p></w:tc>
        <w:tc><w:p><w:r><w:t>(Luo, 2022)</w:t></w:r></w:p></w:tc>
      </w:tr>
    </w:tbl>
    <w:p/>
    <w:p><w:r><w:t>References</w:t></w:r></w:p>
    <w:p><w:r><w:t>Duer, A. (1992). Title.</w:t></w:r></w:p>
    <w:sectPr/>
  </w:body>
</w:document>"#;

fn docx_bytes(document_xml: Option<&str>) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("[Content_Types].xml", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"<?xml version=\"1.0\"?><Types/>").unwrap();
    if let Some(xml) = document_xml {
        zip.start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Reader that returns a fixed document.
struct FixedReader;

impl DocumentReader for FixedReader {
    fn supported_extensions(&self) -> &[&str] {
        &["fixed"]
    }

    fn name(&self) -> &str {
        "fixed"
    }

    fn read_bytes(&self, _bytes: &[u8]) -> Result<Document> {
        Ok(Document::from_paragraphs(["fixed (Luo, 2022)"]))
    }
}

#[test]
fn test_docx_reader_structure() {
    let doc = DocxReader::new()
        .read_bytes(&docx_bytes(Some(DOCUMENT_XML)))
        .unwrap();

    assert_eq!(
        doc.paragraphs,
        vec![
            "Introduction",
            "Earlier work (Duer et al., 1992) shows this.",
            "",
            "References",
            "Duer, A. (1992). Title.",
        ]
    );
    assert_eq!(doc.tables.len(), 1);
    assert_eq!(doc.tables[0].row_count(), 2);
    assert_eq!(doc.tables[0].rows[1].plain_text(), "A\t(Luo, 2022)");
}

#[test]
fn test_docx_text_blocks_order() {
    let doc = DocxReader::new()
        .read_bytes(&docx_bytes(Some(DOCUMENT_XML)))
        .unwrap();

    let blocks: Vec<String> = doc.text_blocks().collect();
    assert_eq!(
        blocks,
        vec![
            "Introduction",
            "Earlier work (Duer et al., 1992) shows this.",
            "References",
            "Duer, A. (1992). Title.",
            "Model",
            "Source",
            "A",
            "(Luo, 2022)",
        ]
    );
}

#[test]
fn test_docx_missing_document_part() {
    let result = DocxReader::new().read_bytes(&docx_bytes(None));
    assert!(matches!(result, Err(Error::InvalidContainer(_))));
}

#[test]
fn test_docx_truncated_archive() {
    let mut data = docx_bytes(Some(DOCUMENT_XML));
    data.truncate(40);
    let result = DocxReader::new().read_bytes(&data);
    assert!(result.is_err());
}

#[test]
fn test_plain_text_reader() {
    let doc = PlainTextReader::new()
        .read_bytes("\u{feff}Line one\n\nLine (Luo, 2022)\r\n".as_bytes())
        .unwrap();
    assert_eq!(doc.paragraphs, vec!["Line one", "", "Line (Luo, 2022)"]);
    assert!(doc.tables.is_empty());
}

#[test]
fn test_detect_formats() {
    assert_eq!(
        detect_format_from_bytes(&docx_bytes(Some(DOCUMENT_XML))).unwrap(),
        DocumentFormat::Docx
    );
    assert_eq!(
        detect_format_from_bytes(b"Plain text").unwrap(),
        DocumentFormat::PlainText
    );
    assert!(matches!(
        detect_format_from_bytes(&[0xff, 0xfe, 0x00, 0xd8]),
        Err(Error::UnknownFormat)
    ));
}

#[test]
fn test_detect_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paper.bin");
    fs::write(&path, docx_bytes(Some(DOCUMENT_XML))).unwrap();

    assert_eq!(detect_format_from_path(&path).unwrap(), DocumentFormat::Docx);
    assert!(matches!(
        detect_format_from_path(dir.path().join("absent.docx")),
        Err(Error::InputNotFound(_))
    ));
}

#[test]
fn test_read_file_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let docx = dir.path().join("paper.DOCX");
    fs::write(&docx, docx_bytes(Some(DOCUMENT_XML))).unwrap();
    assert_eq!(read_file(&docx).unwrap().paragraph_count(), 5);

    let text = dir.path().join("paper.txt");
    fs::write(&text, "a\nb\n").unwrap();
    assert_eq!(read_file(&text).unwrap().paragraphs, vec!["a", "b"]);
}

#[test]
fn test_read_file_missing() {
    let result = read_file(Path::new("/nonexistent/paper.docx"));
    match result {
        Err(Error::InputNotFound(path)) => {
            assert_eq!(path, Path::new("/nonexistent/paper.docx"));
        }
        other => panic!("expected InputNotFound, got {:?}", other.map(|d| d.paragraphs)),
    }
}

#[test]
fn test_registry_custom_reader() {
    let mut registry = ReaderRegistry::new();
    registry.register(Arc::new(FixedReader));

    assert!(registry.supports("fixed"));
    assert!(registry.supports("FIXED"));
    assert!(!registry.supports("docx"));
    assert_eq!(registry.get_by_name("fixed").unwrap().name(), "fixed");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paper.fixed");
    fs::write(&path, b"ignored").unwrap();
    assert_eq!(
        registry.read(&path).unwrap().paragraphs,
        vec!["fixed (Luo, 2022)"]
    );
}

#[test]
fn test_registry_default_extensions() {
    let registry = ReaderRegistry::with_defaults();
    let extensions = registry.supported_extensions();

    for ext in ["docx", "docm", "txt", "text", "md"] {
        assert!(extensions.contains(&ext), "missing {}", ext);
    }
    assert!(!registry.supports("pdf"));
}
