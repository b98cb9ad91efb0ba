//! Human-readable consistency report.

use crate::check::CheckReport;
use crate::reconcile::Verdict;

use super::ReportOptions;

/// Notice written when no reference list heading was found.
pub const NO_REFERENCE_LIST_NOTICE: &str =
    "ERROR: No reference list detected (no suitable heading or nothing after it).";

const VERDICT_CONSISTENT: &str = "OVERALL: Citation-reference consistency looks GOOD. \
All detected in-text citation keys have at least one matching reference entry. \
Any unused references listed above are optional clean-up (not a formal style violation).";

const VERDICT_INCONSISTENT: &str = "OVERALL: Citation-reference consistency has ERRORS. \
Some in-text citations (first author + year) do not have matching entries in the reference list. \
Please add or correct those references.";

const VERDICT_UNDETERMINED: &str = "OVERALL: Could not assess citation consistency \
because no reference list was detected.";

/// Render the text report.
///
/// Sections always appear in the same order: extraction summary, reference
/// list summary, consistency details, totals and the verdict line. Keys and
/// their source citations are sorted, so the same report renders to the
/// same bytes.
pub fn to_report(report: &CheckReport, options: &ReportOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Input file: {}", report.source));

    // Step 1
    lines.push(String::new());
    lines.push("[Step 1] Extracting in-text citation candidates...".to_string());
    lines.push(format!(
        "Number of citation parentheses found: {}",
        report.candidates.len()
    ));
    if let Some(ref path) = options.citations_path {
        lines.push(format!("Citation parentheses saved to: {}", path.display()));
    }
    lines.push(format!(
        "Number of distinct (author|year) citation keys: {}",
        report.citations.len()
    ));
    lines.push(format!(
        "Citation parentheses without an (author, year) pair: {}",
        report.citations.unkeyed.len()
    ));

    // Step 2
    lines.push(String::new());
    lines.push("[Step 2] Extracting reference list...".to_string());
    lines.push(format!(
        "Number of reference lines found after reference heading: {}",
        report.reference_lines.len()
    ));

    let Some(ref reconciliation) = report.reconciliation else {
        lines.push(NO_REFERENCE_LIST_NOTICE.to_string());
        push_summary(&mut lines, report);
        return finish(lines);
    };

    lines.push(format!(
        "Number of parsed reference entries (with year and first author): {}",
        report.references.len()
    ));
    lines.push(format!(
        "Reference lines skipped (no year or first author): {}",
        report.references.skipped.len()
    ));
    if options.list_skipped {
        for skipped in &report.references.skipped {
            lines.push(format!("  - [{}] {}", skipped.reason, skipped.raw));
        }
    }

    // Step 3
    lines.push(String::new());
    lines.push("[Step 3] Checking citation-reference consistency...".to_string());

    lines.push(String::new());
    if reconciliation.missing.is_empty() {
        lines.push(
            "[OK] All detected in-text citation keys have at least one matching reference entry."
                .to_string(),
        );
    } else {
        lines.push(
            "[ERROR] In-text citations with no matching reference entry (by first author + year):"
                .to_string(),
        );
        for (key, sources) in &reconciliation.missing {
            let sources: Vec<&str> = sources.iter().map(String::as_str).collect();
            lines.push(format!(
                "  key = {}   from citation(s): {}",
                key,
                sources.join("; ")
            ));
        }
    }

    lines.push(String::new());
    if reconciliation.unused.is_empty() {
        lines.push(
            "[OK] Every parsed reference entry is cited at least once in the text (by first author + year)."
                .to_string(),
        );
    } else {
        lines.push(
            "[INFO] Reference entries that were not detected in any in-text citation \
(not necessarily an error, but potential clean-up):"
                .to_string(),
        );
        for entry in &reconciliation.unused_entries {
            lines.push(format!("  - {}", entry.raw));
        }
    }

    push_summary(&mut lines, report);
    finish(lines)
}

fn push_summary(lines: &mut Vec<String>, report: &CheckReport) {
    let (missing, unused) = match report.reconciliation {
        Some(ref r) => (r.missing_count().to_string(), r.unused_count().to_string()),
        None => ("undetermined".to_string(), "undetermined".to_string()),
    };

    lines.push(String::new());
    lines.push("[Step 4] Overall summary".to_string());
    lines.push(format!(
        "Total citation parentheses in text: {}",
        report.candidates.len()
    ));
    lines.push(format!(
        "Total distinct citation keys (author|year): {}",
        report.citations.len()
    ));
    lines.push(format!(
        "Total reference lines after heading: {}",
        report.reference_lines.len()
    ));
    lines.push(format!(
        "Total parsed reference entries: {}",
        report.references.len()
    ));
    lines.push(format!(
        "Number of missing citation keys (no match in references): {}",
        missing
    ));
    lines.push(format!(
        "Number of unused reference entries (not cited in text): {}",
        unused
    ));

    lines.push(String::new());
    lines.push(verdict_line(report.verdict()).to_string());
}

/// The `OVERALL:` line for a verdict.
pub fn verdict_line(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Consistent => VERDICT_CONSISTENT,
        Verdict::Inconsistent => VERDICT_INCONSISTENT,
        Verdict::Undetermined => VERDICT_UNDETERMINED,
    }
}

fn finish(lines: Vec<String>) -> String {
    let mut output = lines.join("\n");
    output.push('\n');
    output
}
