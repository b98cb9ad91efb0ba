//! Reference entry parsing.

use crate::citation::CitationKey;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}[a-z]?").expect("valid year regex"));

/// One keyed line of the reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Position among the parsed entries (0-based)
    pub index: usize,

    /// Position among the raw reference lines (0-based)
    pub line: usize,

    /// The line as it appears in the document
    pub raw: String,

    /// First author surname and publication year
    pub key: CitationKey,
}

/// Why a reference line produced no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No four-digit year anywhere in the line
    NoYear,
    /// The text before the first comma holds no usable surname
    NoAuthor,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoYear => write!(f, "no year"),
            SkipReason::NoAuthor => write!(f, "no author"),
        }
    }
}

/// A reference line that could not be keyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// Position among the raw reference lines (0-based)
    pub line: usize,

    /// The line as it appears in the document
    pub raw: String,

    /// Why it was skipped
    pub reason: SkipReason,
}

/// Parsed reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceList {
    /// Keyed entries in list order
    pub entries: Vec<ReferenceEntry>,

    /// Lines that produced no entry
    pub skipped: Vec<SkippedLine>,
}

impl ReferenceList {
    /// Number of parsed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entry was parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The set of reference keys.
    pub fn key_set(&self) -> BTreeSet<&CitationKey> {
        self.entries.iter().map(|e| &e.key).collect()
    }
}

/// Parse one reference line into its key.
///
/// The year is the first year token anywhere in the line; the author is
/// the text before the first comma.
pub fn parse_reference_line(line: &str) -> Result<CitationKey, SkipReason> {
    let year = RE_YEAR.find(line).ok_or(SkipReason::NoYear)?.as_str();

    let first_author = line.split(',').next().unwrap_or_default().trim();
    CitationKey::from_raw(first_author, year).ok_or(SkipReason::NoAuthor)
}

/// Parse reference list lines into keyed entries.
///
/// Lines that cannot be keyed are collected in [`ReferenceList::skipped`]
/// and do not consume an entry index.
pub fn parse_reference_entries(lines: &[String]) -> ReferenceList {
    let mut list = ReferenceList::default();

    for (line, raw) in lines.iter().enumerate() {
        match parse_reference_line(raw) {
            Ok(key) => list.entries.push(ReferenceEntry {
                index: list.entries.len(),
                line,
                raw: raw.clone(),
                key,
            }),
            Err(reason) => {
                log::debug!("Skipping reference line {} ({}): {:?}", line, reason, raw);
                list.skipped.push(SkippedLine {
                    line,
                    raw: raw.clone(),
                    reason,
                });
            }
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_reference_line() {
        let key = parse_reference_line("Duer, A., & Smith, B. (1992). Some title.").unwrap();
        assert_eq!(key.to_string(), "duer|1992");

        let key = parse_reference_line("Allan, J. (2000b). Second paper.").unwrap();
        assert_eq!(key.to_string(), "allan|2000b");

        let key = parse_reference_line("X. Li, Journal of Things, 2015.").unwrap();
        assert_eq!(key.to_string(), "li|2015");
    }

    #[test]
    fn test_first_year_token_wins() {
        let key = parse_reference_line("Luo, X. (2022). Revisiting 1999. Press, 2023.").unwrap();
        assert_eq!(key.year, "2022");
    }

    #[test]
    fn test_skip_reasons() {
        assert_eq!(
            parse_reference_line("Luo, X. (n.d.). Undated."),
            Err(SkipReason::NoYear)
        );
        assert_eq!(
            parse_reference_line("(2019). Anonymous report."),
            Err(SkipReason::NoAuthor)
        );
    }

    #[test]
    fn test_non_latin_surname_is_keyed() {
        let key = parse_reference_line("李明, 2020. Title").unwrap();
        assert_eq!(key.to_string(), "李明|2020");

        let key = parse_reference_line("Øster, K. (2011). Title.").unwrap();
        assert_eq!(key.author, "øster");
    }

    #[test]
    fn test_index_counts_retained_entries_only() {
        let list = parse_reference_entries(&lines(&[
            "Allan, J. (1999). First.",
            "Appendix A",
            "Luo, X. (2022). Second.",
        ]));

        assert_eq!(list.len(), 2);
        assert_eq!(list.entries[0].index, 0);
        assert_eq!(list.entries[1].index, 1);
        assert_eq!(list.entries[1].line, 2);
        assert_eq!(list.entries[1].raw, "Luo, X. (2022). Second.");

        assert_eq!(list.skipped.len(), 1);
        assert_eq!(list.skipped[0].line, 1);
        assert_eq!(list.skipped[0].reason, SkipReason::NoYear);
    }

    #[test]
    fn test_key_set_deduplicates() {
        let list = parse_reference_entries(&lines(&[
            "Luo, X. (2022). First.",
            "Luo, Y. (2022). Second.",
        ]));
        assert_eq!(list.len(), 2);
        assert_eq!(list.key_set().len(), 1);
    }
}
