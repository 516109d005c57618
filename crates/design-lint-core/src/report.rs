//! Report generation for scan results.

use crate::types::{ScanResult, Severity, ValidationResult};
use std::fmt::Write;
use thiserror::Error;

/// Output format for the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable text report.
    #[default]
    Text,
    /// Machine-readable JSON array.
    Json,
}

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// JSON serialization failure.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Renders the full result list in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(result: &ScanResult, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(render_text(result)),
        ReportFormat::Json => render_json(result),
    }
}

/// Serializes the findings as a pretty-printed JSON array.
///
/// Field order per object is `severity, message, line, column, file`;
/// absent optional fields render as `null`.
fn render_json(result: &ScanResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&result.results)?)
}

/// Renders the fixed-header text report.
///
/// Findings are partitioned into errors / warnings / info sections, in
/// that order, preserving discovery order within each section. Empty
/// sections are omitted; a run with no findings prints a single
/// "no issues" line. The report always ends with the total count.
fn render_text(result: &ScanResult) -> String {
    let mut out = String::new();
    out.push_str("Design Guideline Validation Report\n");
    out.push_str("==================================\n\n");

    if result.results.is_empty() {
        out.push_str("No issues found.\n");
    } else {
        let sections = [
            ("ERRORS", Severity::Error),
            ("WARNINGS", Severity::Warning),
            ("INFO", Severity::Info),
        ];
        for (label, severity) in sections {
            let entries = result.by_severity(severity);
            if entries.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{label}:");
            for entry in entries {
                let _ = writeln!(out, "  {}", format_entry(entry));
            }
            out.push('\n');
        }
    }

    let _ = writeln!(out, "Total issues: {}", result.results.len());
    out
}

fn format_entry(result: &ValidationResult) -> String {
    match (&result.file, result.line) {
        (Some(file), Some(line)) => {
            format!("• {} ({}:{line})", result.message, file.display())
        }
        (Some(file), None) => format!("• {} ({})", result.message, file.display()),
        _ => format!("• {}", result.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ScanResult {
        let mut result = ScanResult::new();
        result.files_checked = 2;
        result.results.push(
            ValidationResult::new(Severity::Warning, "Color '#123456' not in defined color palette")
                .with_line(1)
                .with_file("style.css"),
        );
        result.results.push(
            ValidationResult::new(Severity::Error, "Image tag missing alt attribute")
                .with_file("app.jsx"),
        );
        result.results.push(
            ValidationResult::new(Severity::Warning, "Font weight '500' not in allowed font weights")
                .with_line(1)
                .with_file("style.css"),
        );
        result
    }

    #[test]
    fn text_report_has_fixed_header_and_total() {
        let report = render(&sample_result(), ReportFormat::Text).unwrap();
        assert!(report.starts_with("Design Guideline Validation Report\n"));
        assert!(report.ends_with("Total issues: 3\n"));
    }

    #[test]
    fn text_sections_in_severity_order() {
        let report = render(&sample_result(), ReportFormat::Text).unwrap();
        let errors = report.find("ERRORS:").unwrap();
        let warnings = report.find("WARNINGS:").unwrap();
        assert!(errors < warnings);
        // No info findings: the INFO section is omitted entirely
        assert!(!report.contains("INFO:"));
    }

    #[test]
    fn text_entries_carry_location() {
        let report = render(&sample_result(), ReportFormat::Text).unwrap();
        assert!(report.contains("• Color '#123456' not in defined color palette (style.css:1)"));
        assert!(report.contains("• Image tag missing alt attribute (app.jsx)"));
    }

    #[test]
    fn text_preserves_discovery_order_within_section() {
        let report = render(&sample_result(), ReportFormat::Text).unwrap();
        let first = report.find("Color '#123456'").unwrap();
        let second = report.find("Font weight '500'").unwrap();
        assert!(first < second);
    }

    #[test]
    fn empty_result_prints_no_issues_line() {
        let report = render(&ScanResult::new(), ReportFormat::Text).unwrap();
        assert!(report.contains("No issues found.\n"));
        assert!(!report.contains("ERRORS:"));
        assert!(!report.contains("WARNINGS:"));
        assert!(report.ends_with("Total issues: 0\n"));
    }

    #[test]
    fn json_is_array_with_null_optionals() {
        let report = render(&sample_result(), ReportFormat::Json).unwrap();
        assert!(report.starts_with('['));
        // File-level finding: line stays null
        assert!(report.contains("\"line\": null"));
        // Column is never populated by current checks
        assert!(report.contains("\"column\": null"));
        // 2-space indentation
        assert!(report.contains("\n  {"));
    }

    #[test]
    fn json_round_trips_severity_counts() {
        let original = sample_result();
        let report = render(&original, ReportFormat::Json).unwrap();
        let parsed: Vec<ValidationResult> = serde_json::from_str(&report).unwrap();
        let reparsed = ScanResult {
            results: parsed,
            files_checked: 0,
        };
        assert_eq!(reparsed.count_by_severity(), original.count_by_severity());
    }
}
