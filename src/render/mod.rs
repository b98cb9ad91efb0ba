//! Rendering module for check reports.

mod json;
mod options;
mod report;
mod text;

pub use json::{to_json, JsonFormat};
pub use options::ReportOptions;
pub use report::{to_report, verdict_line, NO_REFERENCE_LIST_NOTICE};
pub use text::to_citation_list;
