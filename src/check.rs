//! Citation consistency check pipeline.

use crate::citation::{build_citation_index, scan_candidates, CitationIndex};
use crate::extract::{extract_text, reference_paragraphs};
use crate::model::Document;
use crate::options::CheckOptions;
use crate::reconcile::{reconcile, Reconciliation, Verdict};
use crate::references::{locate_reference_list, parse_reference_entries, ReferenceList};
use serde::{Deserialize, Serialize};

/// Everything a check found in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Identification of the checked document (usually its path)
    pub source: String,

    /// Citation candidates in order of appearance
    pub candidates: Vec<String>,

    /// Keys built from the candidates
    pub citations: CitationIndex,

    /// Non-empty paragraphs after the reference list heading
    pub reference_lines: Vec<String>,

    /// Keyed reference entries
    pub references: ReferenceList,

    /// Comparison result, absent when no reference list was detected
    pub reconciliation: Option<Reconciliation>,
}

impl CheckReport {
    /// Check if a reference list was detected.
    pub fn reference_list_detected(&self) -> bool {
        self.reconciliation.is_some()
    }

    /// Overall verdict.
    pub fn verdict(&self) -> Verdict {
        match self.reconciliation {
            Some(ref reconciliation) => reconciliation.verdict(),
            None => Verdict::Undetermined,
        }
    }
}

/// Run the full check over a document.
///
/// # Example
///
/// ```
/// use citecheck::{check_document, CheckOptions, Document, Verdict};
///
/// let doc = Document::from_paragraphs([
///     "As shown earlier (Luo, 2022).",
///     "References",
///     "Luo, X. (2022). A title.",
/// ]);
/// let report = check_document(&doc, "memo.txt", &CheckOptions::default());
/// assert_eq!(report.verdict(), Verdict::Consistent);
/// ```
pub fn check_document(doc: &Document, source: &str, options: &CheckOptions) -> CheckReport {
    let text = extract_text(doc, options);
    let candidates = scan_candidates(&text);
    let citations = build_citation_index(&candidates);
    log::info!(
        "{}: {} citation candidates, {} distinct keys",
        source,
        candidates.len(),
        citations.len()
    );

    let paragraphs = reference_paragraphs(doc, options);
    let reference_lines = locate_reference_list(&paragraphs, &options.heading_keywords);

    let (references, reconciliation) = if reference_lines.is_empty() {
        log::warn!(
            "{}: no reference list detected (no suitable heading or nothing after it)",
            source
        );
        (ReferenceList::default(), None)
    } else {
        let references = parse_reference_entries(&reference_lines);
        log::info!(
            "{}: {} reference lines, {} parsed entries, {} skipped",
            source,
            reference_lines.len(),
            references.len(),
            references.skipped.len()
        );
        let reconciliation = reconcile(&citations, &references);
        (references, Some(reconciliation))
    };

    CheckReport {
        source: source.to_string(),
        candidates,
        citations,
        reference_lines,
        references,
        reconciliation,
    }
}
