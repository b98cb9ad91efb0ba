//! Parenthetical citation candidate scanning.

use regex::Regex;
use std::sync::LazyLock;

/// A flat parenthetical group holding at least one year token.
///
/// Each segment is matched lazily so that a group never swallows text past
/// its own closing parenthesis. Groups with nested parentheses never match.
static RE_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^()]*?\d{4}[a-z]?[^()]*?(?:[;,][^()]*\d{4}[a-z]?[^()]*)*\)")
        .expect("valid candidate regex")
});

/// Scan text for name-year citation candidates.
///
/// Returns the content of every matching parenthetical group, without the
/// parentheses and surrounding whitespace, in order of appearance.
/// Duplicates are preserved.
///
/// # Example
///
/// ```
/// use citecheck::citation::scan_candidates;
///
/// let found = scan_candidates("as shown (Duer et al., 1992; Luo, 2022) and (see discussion)");
/// assert_eq!(found, vec!["Duer et al., 1992; Luo, 2022"]);
/// ```
pub fn scan_candidates(text: &str) -> Vec<String> {
    RE_CANDIDATE
        .find_iter(text)
        .map(|m| {
            let group = m.as_str();
            group[1..group.len() - 1].trim().to_string()
        })
        .collect()
}
