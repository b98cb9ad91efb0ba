//! Citation keys and the in-text key index.

use crate::normalize::normalize_author;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// "Author, 1999" pairs inside a candidate group. The author part starts
/// with a capital letter and runs to the next comma.
static RE_AUTHOR_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][^,]*?),\s*(\d{4}[a-z]?)").expect("valid author-year regex")
});

/// A normalized `(surname, year)` pair.
///
/// The year keeps its disambiguation suffix, so `2020` and `2020a` are
/// different keys. Displayed and serialized as `surname|year`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CitationKey {
    /// Lower-case surname of the first author
    pub author: String,

    /// Four-digit year with optional lower-case suffix
    pub year: String,
}

impl CitationKey {
    /// Create a key from an already normalized surname and a year token.
    pub fn new(author: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            year: year.into(),
        }
    }

    /// Build a key from a raw author fragment.
    ///
    /// Returns `None` when the fragment has no usable surname.
    pub fn from_raw(raw_author: &str, year: &str) -> Option<Self> {
        let author = normalize_author(raw_author);
        if author.is_empty() {
            None
        } else {
            Some(Self::new(author, year))
        }
    }
}

impl fmt::Display for CitationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.author, self.year)
    }
}

impl FromStr for CitationKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('|') {
            Some((author, year)) if !author.is_empty() && !year.is_empty() => {
                Ok(Self::new(author, year))
            }
            _ => Err(format!("invalid citation key: {:?}", s)),
        }
    }
}

impl Serialize for CitationKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CitationKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// In-text citation keys with the candidate groups they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationIndex {
    /// Key to the set of candidate strings that produced it
    pub keys: BTreeMap<CitationKey, BTreeSet<String>>,

    /// Candidates that produced no key, in order of appearance
    pub unkeyed: Vec<String>,
}

impl CitationIndex {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if no key was built.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Check if a key was cited.
    pub fn contains(&self, key: &CitationKey) -> bool {
        self.keys.contains_key(key)
    }

    /// Candidate strings that produced a key.
    pub fn sources(&self, key: &CitationKey) -> Option<&BTreeSet<String>> {
        self.keys.get(key)
    }

    /// The set of cited keys.
    pub fn key_set(&self) -> BTreeSet<&CitationKey> {
        self.keys.keys().collect()
    }
}

/// Split one candidate into its `(author fragment, year)` pairs.
///
/// A segment without a comma between author and year ("Allan 2000a") does
/// not match and is skipped, even inside an otherwise matched group.
pub fn author_year_pairs(candidate: &str) -> Vec<(&str, &str)> {
    RE_AUTHOR_YEAR
        .captures_iter(candidate)
        .filter_map(|caps| {
            let author = caps.get(1)?.as_str().trim();
            let year = caps.get(2)?.as_str();
            Some((author, year))
        })
        .collect()
}

/// Build the key index for a sequence of candidates.
///
/// # Example
///
/// ```
/// use citecheck::citation::{build_citation_index, CitationKey};
///
/// let index = build_citation_index(&["Duer et al., 1992; Luo, 2022".to_string()]);
/// assert!(index.contains(&CitationKey::new("duer", "1992")));
/// assert!(index.contains(&CitationKey::new("luo", "2022")));
/// ```
pub fn build_citation_index(candidates: &[String]) -> CitationIndex {
    let mut index = CitationIndex::default();

    for candidate in candidates {
        let mut keyed = false;
        for (author, year) in author_year_pairs(candidate) {
            match CitationKey::from_raw(author, year) {
                Some(key) => {
                    index.keys.entry(key).or_default().insert(candidate.clone());
                    keyed = true;
                }
                None => log::debug!("Skipping citation segment {:?}: no usable author", author),
            }
        }
        if !keyed {
            log::debug!("No author-year pair in citation {:?}", candidate);
            index.unkeyed.push(candidate.clone());
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(index: &CitationIndex) -> Vec<String> {
        index.keys.keys().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_citation_key_display_and_parse() {
        let key = CitationKey::new("allan", "2000a");
        assert_eq!(key.to_string(), "allan|2000a");
        assert_eq!("allan|2000a".parse::<CitationKey>().unwrap(), key);
        assert!("allan".parse::<CitationKey>().is_err());
        assert!("|1999".parse::<CitationKey>().is_err());
    }

    #[test]
    fn test_citation_key_serde() {
        let key = CitationKey::new("luo", "2022");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"luo|2022\"");
        let back: CitationKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_multi_citation_group() {
        let candidate = "Duer et al., 1992; Luo, 2022".to_string();
        let index = build_citation_index(&[candidate.clone()]);

        assert_eq!(keys_of(&index), vec!["duer|1992", "luo|2022"]);
        let sources = index.sources(&CitationKey::new("luo", "2022")).unwrap();
        assert!(sources.contains(&candidate));
        assert!(index.unkeyed.is_empty());
    }

    #[test]
    fn test_segments_without_comma_are_skipped() {
        let candidate = "Allan, 1999, Allan and Jones, 1999, Allan 2000a, Allan 2000b".to_string();
        let index = build_citation_index(&[candidate]);
        assert_eq!(keys_of(&index), vec!["allan|1999"]);
    }

    #[test]
    fn test_provenance_collects_distinct_candidates() {
        let candidates = vec![
            "Luo, 2022".to_string(),
            "Luo, 2022; Allan, 1999".to_string(),
            "Luo, 2022".to_string(),
        ];
        let index = build_citation_index(&candidates);
        let sources = index.sources(&CitationKey::new("luo", "2022")).unwrap();
        assert_eq!(sources.len(), 2);
    }

    #[test]
    fn test_unkeyed_candidates() {
        let candidates = vec!["2022".to_string(), "see Fig. 3, 2019".to_string()];
        let index = build_citation_index(&candidates);

        // "Fig. 3" is capitalized, so it keys as "fig|2019"
        assert_eq!(keys_of(&index), vec!["fig|2019"]);
        assert_eq!(index.unkeyed, vec!["2022"]);
    }

    #[test]
    fn test_year_suffix_kept() {
        let index = build_citation_index(&["Smith, 2020a".to_string()]);
        assert!(index.contains(&CitationKey::new("smith", "2020a")));
        assert!(!index.contains(&CitationKey::new("smith", "2020")));
    }

    #[test]
    fn test_author_year_pairs() {
        // "Li, X., 2011" cannot pair "Li" with the year; the initial is taken instead
        let pairs = author_year_pairs("X. Li, 2010, and Li, X., 2011");
        assert_eq!(pairs, vec![("X. Li", "2010"), ("X.", "2011")]);
    }
}
