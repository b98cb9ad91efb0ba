//! Two-way reconciliation of citation keys and reference keys.

use crate::citation::{CitationIndex, CitationKey};
use crate::references::{ReferenceEntry, ReferenceList};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Overall outcome of a consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every cited key has a reference entry
    Consistent,
    /// At least one cited key has no reference entry
    Inconsistent,
    /// No reference list was found, so nothing could be compared
    Undetermined,
}

impl Verdict {
    /// Check if the verdict is a pass.
    pub fn is_consistent(&self) -> bool {
        matches!(self, Verdict::Consistent)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Consistent => write!(f, "consistent"),
            Verdict::Inconsistent => write!(f, "inconsistent"),
            Verdict::Undetermined => write!(f, "undetermined"),
        }
    }
}

/// Result of comparing in-text citations with the reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// Cited keys with no reference entry, with the citations they came from
    pub missing: BTreeMap<CitationKey, BTreeSet<String>>,

    /// Reference keys never cited in the text
    pub unused: BTreeSet<CitationKey>,

    /// Reference entries whose key is unused, in list order
    pub unused_entries: Vec<ReferenceEntry>,
}

impl Reconciliation {
    /// Number of missing keys.
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// Number of unused keys.
    pub fn unused_count(&self) -> usize {
        self.unused.len()
    }

    /// Verdict for this comparison. Unused entries never fail a check.
    pub fn verdict(&self) -> Verdict {
        if self.missing.is_empty() {
            Verdict::Consistent
        } else {
            Verdict::Inconsistent
        }
    }
}

/// Compare citation keys with reference keys.
///
/// Keys match only on exact surname and year equality, including the year
/// suffix.
pub fn reconcile(citations: &CitationIndex, references: &ReferenceList) -> Reconciliation {
    let reference_keys = references.key_set();
    let citation_keys = citations.key_set();

    let missing: BTreeMap<CitationKey, BTreeSet<String>> = citations
        .keys
        .iter()
        .filter(|(key, _)| !reference_keys.contains(key))
        .map(|(key, sources)| (key.clone(), sources.clone()))
        .collect();

    let unused: BTreeSet<CitationKey> = reference_keys
        .difference(&citation_keys)
        .map(|key| (*key).clone())
        .collect();

    let unused_entries = references
        .entries
        .iter()
        .filter(|e| unused.contains(&e.key))
        .cloned()
        .collect();

    log::info!(
        "Reconciled {} citation keys against {} reference keys: {} missing, {} unused",
        citation_keys.len(),
        reference_keys.len(),
        missing.len(),
        unused.len()
    );

    Reconciliation {
        missing,
        unused,
        unused_entries,
    }
}
