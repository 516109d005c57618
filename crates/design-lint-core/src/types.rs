//! Core types for guideline findings and scan results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for guideline findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suggestion only, does not fail the run.
    Info,
    /// Deviation that should be addressed.
    Warning,
    /// Violation that must be fixed; affects the exit code.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single guideline finding.
///
/// Immutable once created; findings are only collected into an ordered
/// sequence, never mutated. Field declaration order is the JSON field
/// order of the machine-readable report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Severity of this finding.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Line number (1-indexed), absent for file-level findings.
    pub line: Option<usize>,
    /// Column number (1-indexed). Reserved; current checks never set it.
    pub column: Option<usize>,
    /// Path of the file the finding refers to.
    pub file: Option<PathBuf>,
}

impl ValidationResult {
    /// Creates a new finding with no location attached.
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            line: None,
            column: None,
            file: None,
        }
    }

    /// Attaches a 1-indexed line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attaches the file path.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, " ({}:{line})", file.display()),
            (Some(file), None) => write!(f, " ({})", file.display()),
            _ => Ok(()),
        }
    }
}

/// Result of scanning a set of inputs.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScanResult {
    /// All findings, in discovery order.
    pub results: Vec<ValidationResult>,
    /// Number of files scanned.
    pub files_checked: usize,
}

impl ScanResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any finding has `error` severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.results.iter().any(|r| r.severity == Severity::Error)
    }

    /// Counts findings as (errors, warnings, infos).
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let errors = self
            .results
            .iter()
            .filter(|r| r.severity == Severity::Error)
            .count();
        let warnings = self
            .results
            .iter()
            .filter(|r| r.severity == Severity::Warning)
            .count();
        let infos = self
            .results
            .iter()
            .filter(|r| r.severity == Severity::Info)
            .count();
        (errors, warnings, infos)
    }

    /// Returns findings filtered by severity, preserving discovery order.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&ValidationResult> {
        self.results
            .iter()
            .filter(|r| r.severity == severity)
            .collect()
    }

    /// Adds findings from another result.
    pub fn extend(&mut self, other: Self) {
        self.results.extend(other.results);
        self.files_checked += other.files_checked;
    }
}
