//! Reference list extraction.
//!
//! The list is located by its heading ([`locate_reference_list`]) and each
//! of its lines is keyed by first author and year
//! ([`parse_reference_entries`]).

mod entry;
mod locator;

pub use entry::{
    parse_reference_entries, parse_reference_line, ReferenceEntry, ReferenceList, SkipReason,
    SkippedLine,
};
pub use locator::locate_reference_list;
