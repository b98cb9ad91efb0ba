//! Author name normalization.
//!
//! Author fragments from in-text citations ("Duer et al.", "X. Li") and
//! from reference lines ("Li, X.") are reduced to a lower-case surname so
//! the two sides can be compared. The reduction is an ordered chain of
//! [`NormalizeRule`]s. It is tuned for the "Surname, Initials" and
//! "Initial. Surname" conventions and is not a general name parser.

use regex::Regex;
use std::sync::LazyLock;

static RE_ET_AL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bet al\b\.?").expect("valid et al regex"));

/// A token that is a single capital letter, optionally followed by a period.
static RE_INITIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\.?$").expect("valid initial regex"));

static RE_NON_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\-'\s]").expect("valid name character regex"));

/// One step of the author normalization chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeRule {
    /// Remove every "et al." and trim.
    StripEtAl,
    /// Keep only the text before the first comma.
    FirstAuthorOnly,
    /// Pick the surname token: the last token after a leading initial,
    /// otherwise the first token. Fails when no token remains.
    PickSurname,
    /// Drop everything except letters, hyphens, apostrophes and spaces.
    StripNonName,
    /// Lower-case the result.
    Lowercase,
}

impl NormalizeRule {
    /// The rules in the order they are applied.
    pub const CHAIN: [NormalizeRule; 5] = [
        NormalizeRule::StripEtAl,
        NormalizeRule::FirstAuthorOnly,
        NormalizeRule::PickSurname,
        NormalizeRule::StripNonName,
        NormalizeRule::Lowercase,
    ];

    /// Apply this rule alone. `None` means no usable author remains.
    pub fn apply(self, input: &str) -> Option<String> {
        match self {
            NormalizeRule::StripEtAl => Some(RE_ET_AL.replace_all(input, "").trim().to_string()),
            NormalizeRule::FirstAuthorOnly => match input.split_once(',') {
                Some((first, _)) => Some(first.trim().to_string()),
                None => Some(input.to_string()),
            },
            NormalizeRule::PickSurname => {
                let tokens: Vec<&str> = input.split_whitespace().collect();
                let surname = match tokens.as_slice() {
                    [] => return None,
                    [first, .., last] if RE_INITIAL.is_match(first) => last,
                    [first, ..] => first,
                };
                Some(surname.to_string())
            }
            NormalizeRule::StripNonName => {
                let cleaned = RE_NON_NAME.replace_all(input, "");
                (!cleaned.is_empty()).then(|| cleaned.into_owned())
            }
            NormalizeRule::Lowercase => Some(input.to_lowercase()),
        }
    }
}

/// Normalize an author fragment to a surname key.
///
/// Returns an empty string when no usable surname can be extracted; callers
/// skip such items.
///
/// # Example
///
/// ```
/// use citecheck::normalize_author;
///
/// assert_eq!(normalize_author("Duer et al."), "duer");
/// assert_eq!(normalize_author("X. Li"), "li");
/// assert_eq!(normalize_author("Li, X."), "li");
/// ```
pub fn normalize_author(raw: &str) -> String {
    let mut current = raw.trim().to_string();
    for rule in NormalizeRule::CHAIN {
        match rule.apply(&current) {
            Some(next) => current = next,
            None => return String::new(),
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(rule: NormalizeRule, input: &str) -> Option<String> {
        rule.apply(input)
    }

    #[test]
    fn test_strip_et_al() {
        let rule = NormalizeRule::StripEtAl;
        assert_eq!(apply(rule, "Duer et al.").unwrap(), "Duer");
        assert_eq!(apply(rule, "X. Li et al").unwrap(), "X. Li");
        // Case-sensitive
        assert_eq!(apply(rule, "Duer Et Al.").unwrap(), "Duer Et Al.");
        // Only the whole token
        assert_eq!(apply(rule, "Bet alpha").unwrap(), "Bet alpha");
    }

    #[test]
    fn test_first_author_only() {
        let rule = NormalizeRule::FirstAuthorOnly;
        assert_eq!(
            apply(rule, "Surname, F., and Other, G.").unwrap(),
            "Surname"
        );
        assert_eq!(
            apply(rule, "Allan and Jones").unwrap(),
            "Allan and Jones"
        );
    }

    #[test]
    fn test_pick_surname() {
        let rule = NormalizeRule::PickSurname;
        assert_eq!(apply(rule, "X. Li").unwrap(), "Li");
        assert_eq!(apply(rule, "X Li").unwrap(), "Li");
        assert_eq!(apply(rule, "J. R. R. Tolkien").unwrap(), "Tolkien");
        assert_eq!(apply(rule, "Allan and Jones").unwrap(), "Allan");
        // A lone initial is its own surname
        assert_eq!(apply(rule, "X.").unwrap(), "X.");
        assert_eq!(apply(rule, "   "), None);
    }

    #[test]
    fn test_strip_non_name() {
        let rule = NormalizeRule::StripNonName;
        assert_eq!(apply(rule, "O'Brien-Smith.").unwrap(), "O'Brien-Smith");
        assert_eq!(apply(rule, "Müller").unwrap(), "Müller");
        assert_eq!(apply(rule, "李明").unwrap(), "李明");
        assert_eq!(apply(rule, "(1999)."), None);
    }

    #[test]
    fn test_normalize_author() {
        assert_eq!(normalize_author("Duer et al."), "duer");
        assert_eq!(normalize_author("X. Li"), "li");
        assert_eq!(normalize_author("Li, X."), "li");
        assert_eq!(normalize_author("  Allan and Jones "), "allan");
        assert_eq!(normalize_author("van der Berg"), "van");
        assert_eq!(normalize_author("X. Li et al."), "li");
    }

    #[test]
    fn test_normalize_author_unusable() {
        assert_eq!(normalize_author(""), "");
        assert_eq!(normalize_author("et al."), "");
        assert_eq!(normalize_author("12345"), "");
    }
}
