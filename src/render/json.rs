//! JSON rendering of check reports.

use crate::check::CheckReport;
use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a check report to JSON.
pub fn to_json(report: &CheckReport, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{check_document, CheckOptions, Document};

    fn sample_report() -> CheckReport {
        let doc = Document::from_paragraphs([
            "Text (Duer, 1992).",
            "References",
            "Duer, A. (1993). Title.",
        ]);
        check_document(&doc, "paper.docx", &CheckOptions::default())
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_report(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"duer|1992\""));
        assert!(json.contains("\"duer|1993\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact_round_trip() {
        let report = sample_report();
        let json = to_json(&report, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));

        let back: CheckReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
