//! Plain text citation list.

use crate::check::CheckReport;

/// Render the citation candidates, one per line, in order of appearance.
pub fn to_citation_list(report: &CheckReport) -> String {
    let mut output = String::new();
    for candidate in &report.candidates {
        output.push_str(candidate);
        output.push('\n');
    }
    output
}
