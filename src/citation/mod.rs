//! In-text citation extraction.
//!
//! Citations are found in two steps: [`scan_candidates`] picks the
//! parenthetical groups that contain a year, then [`build_citation_index`]
//! splits each group into `Author, Year` pairs and turns them into
//! [`CitationKey`]s.

mod keys;
mod scanner;

pub use keys::{author_year_pairs, build_citation_index, CitationIndex, CitationKey};
pub use scanner::scan_candidates;
