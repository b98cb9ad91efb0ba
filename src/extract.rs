//! Text extraction from the document model.

use crate::model::Document;
use crate::options::CheckOptions;
use unicode_normalization::UnicodeNormalization;

/// Collect the text blocks scanned for in-text citations.
///
/// Body paragraphs come first, then table cells unless tables are disabled.
/// Empty blocks are dropped.
pub fn text_blocks(doc: &Document, options: &CheckOptions) -> Vec<String> {
    let blocks: Vec<String> = if options.include_tables {
        doc.text_blocks().collect()
    } else {
        doc.paragraphs
            .iter()
            .filter(|p| !p.is_empty())
            .cloned()
            .collect()
    };

    if options.normalize_unicode {
        blocks.into_iter().map(|b| normalize_block(&b)).collect()
    } else {
        blocks
    }
}

/// Flatten the document into a single newline-separated string.
pub fn extract_text(doc: &Document, options: &CheckOptions) -> String {
    text_blocks(doc, options).join("\n")
}

/// Body paragraphs used to locate the reference list (tables excluded).
pub fn reference_paragraphs(doc: &Document, options: &CheckOptions) -> Vec<String> {
    if options.normalize_unicode {
        doc.paragraphs.iter().map(|p| normalize_block(p)).collect()
    } else {
        doc.paragraphs.clone()
    }
}

fn normalize_block(text: &str) -> String {
    text.nfc().collect()
}
