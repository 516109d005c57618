//! Scanner that walks inputs and dispatches files to the matching checks.

use crate::check::CheckBox;
use crate::config::GuidelineConfig;
use crate::context::FileContext;
use crate::types::{ScanResult, Severity, ValidationResult};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Stylesheet extensions accepted when a file is passed directly.
const STYLESHEET_EXTENSIONS: &[&str] = &["css", "scss", "sass"];

/// Markup extensions accepted when a file is passed directly.
const MARKUP_EXTENSIONS: &[&str] = &["jsx", "tsx"];

/// Extensions discovered under directory arguments. `sass` is deliberately
/// absent: directory discovery has never picked it up, and the asymmetry
/// with direct-file dispatch is kept as-is.
const DISCOVERED_EXTENSIONS: &[&str] = &["css", "scss", "jsx", "tsx"];

/// Errors that can occur during scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Invalid glob pattern built from a directory argument.
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Builder for configuring a [`Scanner`].
#[derive(Default)]
pub struct ScannerBuilder {
    config: Option<GuidelineConfig>,
    stylesheet_checks: Vec<CheckBox>,
    markup_checks: Vec<CheckBox>,
}

impl ScannerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the guideline configuration.
    #[must_use]
    pub fn config(mut self, config: GuidelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Adds a check run against stylesheet files.
    #[must_use]
    pub fn stylesheet_check(mut self, check: CheckBox) -> Self {
        self.stylesheet_checks.push(check);
        self
    }

    /// Adds multiple stylesheet checks, preserving order.
    #[must_use]
    pub fn stylesheet_checks(mut self, checks: impl IntoIterator<Item = CheckBox>) -> Self {
        self.stylesheet_checks.extend(checks);
        self
    }

    /// Adds a check run against markup files.
    #[must_use]
    pub fn markup_check(mut self, check: CheckBox) -> Self {
        self.markup_checks.push(check);
        self
    }

    /// Adds multiple markup checks, preserving order.
    #[must_use]
    pub fn markup_checks(mut self, checks: impl IntoIterator<Item = CheckBox>) -> Self {
        self.markup_checks.extend(checks);
        self
    }

    /// Builds the scanner.
    #[must_use]
    pub fn build(self) -> Scanner {
        Scanner {
            config: self.config.unwrap_or_default(),
            stylesheet_checks: self.stylesheet_checks,
            markup_checks: self.markup_checks,
        }
    }
}

/// Walks input paths and runs the matching check set over each file.
///
/// Fully synchronous: each file is read into memory, scanned, and dropped
/// before the next one. Use [`Scanner::builder()`] to construct an
/// instance.
pub struct Scanner {
    config: GuidelineConfig,
    stylesheet_checks: Vec<CheckBox>,
    markup_checks: Vec<CheckBox>,
}

impl Scanner {
    /// Creates a new builder for configuring a scanner.
    #[must_use]
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::new()
    }

    /// Returns the number of registered checks.
    #[must_use]
    pub fn check_count(&self) -> usize {
        self.stylesheet_checks.len() + self.markup_checks.len()
    }

    /// Scans all input paths and aggregates findings in discovery order.
    ///
    /// File arguments are dispatched by extension; unknown extensions and
    /// paths that are neither a file nor a directory are silently skipped.
    /// Directory arguments are searched recursively for each discovered
    /// extension in turn. An existing file that cannot be read yields a
    /// single `error`-severity finding and scanning continues.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory argument produces an invalid glob
    /// pattern.
    pub fn scan(&self, paths: &[PathBuf]) -> Result<ScanResult, ScanError> {
        info!("Scanning {} input path(s)", paths.len());

        let mut result = ScanResult::new();
        for path in paths {
            if path.is_dir() {
                for file in self.discover_files(path)? {
                    self.scan_file(&file, &mut result);
                }
            } else if path.is_file() {
                self.scan_file(path, &mut result);
            } else {
                debug!("Skipping {} (not a file or directory)", path.display());
            }
        }

        info!(
            "Scan complete: {} finding(s) in {} file(s)",
            result.results.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Discovers checkable files under a directory, one recursive pass
    /// per extension.
    fn discover_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let mut files = Vec::new();

        for ext in DISCOVERED_EXTENSIONS {
            let pattern = format!("{}/**/*.{ext}", dir.display());
            for entry in glob::glob(&pattern)? {
                match entry {
                    Ok(path) => files.push(path),
                    Err(e) => debug!("Skipping unreadable entry: {e}"),
                }
            }
        }

        Ok(files)
    }

    /// Dispatches one file to the check set matching its extension.
    fn scan_file(&self, path: &Path, result: &mut ScanResult) {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        let checks = if STYLESHEET_EXTENSIONS.contains(&ext) {
            &self.stylesheet_checks
        } else if MARKUP_EXTENSIONS.contains(&ext) {
            &self.markup_checks
        } else {
            debug!("Skipping {} (unhandled extension)", path.display());
            return;
        };

        debug!("Checking {}", path.display());

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                // Local recovery: one finding for this file, keep going
                result.results.push(
                    ValidationResult::new(Severity::Error, format!("Failed to read file: {e}"))
                        .with_file(path),
                );
                return;
            }
        };

        let ctx = FileContext::new(path, &content);
        for check in checks {
            result.results.extend(check.run(&ctx, &self.config));
        }
        result.files_checked += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Check;
    use std::fs;
    use tempfile::TempDir;

    /// Emits one info finding per file it sees, tagged with its name.
    struct Marker(&'static str);

    impl Check for Marker {
        fn name(&self) -> &'static str {
            self.0
        }

        fn run(&self, ctx: &FileContext, _config: &GuidelineConfig) -> Vec<ValidationResult> {
            vec![ValidationResult::new(Severity::Info, self.0).with_file(ctx.path)]
        }
    }

    fn scanner() -> Scanner {
        Scanner::builder()
            .stylesheet_check(Box::new(Marker("stylesheet")))
            .markup_check(Box::new(Marker("markup")))
            .build()
    }

    #[test]
    fn dispatches_by_extension() {
        let tmp = TempDir::new().unwrap();
        let css = tmp.path().join("a.css");
        let jsx = tmp.path().join("b.jsx");
        fs::write(&css, "body {}").unwrap();
        fs::write(&jsx, "<div />").unwrap();

        let result = scanner().scan(&[css, jsx]).unwrap();
        let messages: Vec<&str> = result.results.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["stylesheet", "markup"]);
        assert_eq!(result.files_checked, 2);
    }

    #[test]
    fn unknown_extension_is_silently_skipped() {
        let tmp = TempDir::new().unwrap();
        let html = tmp.path().join("page.html");
        fs::write(&html, "<div>").unwrap();

        let result = scanner().scan(&[html]).unwrap();
        assert!(result.results.is_empty());
        assert_eq!(result.files_checked, 0);
    }

    #[test]
    fn sass_runs_stylesheet_checks_when_passed_directly() {
        let tmp = TempDir::new().unwrap();
        let sass = tmp.path().join("a.sass");
        fs::write(&sass, "body\n  color: red").unwrap();

        let result = scanner().scan(&[sass]).unwrap();
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].message, "stylesheet");
    }

    #[test]
    fn directory_discovery_never_matches_sass() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.css"), "").unwrap();
        fs::write(tmp.path().join("b.sass"), "").unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested/c.scss"), "").unwrap();
        fs::write(tmp.path().join("nested/d.tsx"), "").unwrap();

        let result = scanner().scan(&[tmp.path().to_path_buf()]).unwrap();
        // a.css, nested/c.scss, nested/d.tsx — b.sass is not discovered
        assert_eq!(result.files_checked, 3);
        let seen: Vec<String> = result
            .results
            .iter()
            .filter_map(|r| r.file.as_ref())
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert!(!seen.contains(&"b.sass".to_string()));
    }

    #[test]
    fn nonexistent_path_is_silently_skipped() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("no/such/file.css");
        let good = tmp.path().join("good.css");
        fs::write(&good, "body {}").unwrap();

        let result = scanner().scan(&[missing, good]).unwrap();
        // No error finding for the missing argument; the exit code stays clean
        assert!(!result.has_errors());
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].message, "stylesheet");
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn unreadable_file_becomes_error_finding() {
        let tmp = TempDir::new().unwrap();
        let bad = tmp.path().join("bad.css");
        // Invalid UTF-8 makes read_to_string fail
        fs::write(&bad, [0xFF, 0xFE, 0x00]).unwrap();
        let good = tmp.path().join("good.css");
        fs::write(&good, "body {}").unwrap();

        let result = scanner().scan(&[bad.clone(), good]).unwrap();
        assert_eq!(result.results[0].severity, Severity::Error);
        assert!(result.results[0].message.starts_with("Failed to read file"));
        assert_eq!(result.results[0].file.as_deref(), Some(bad.as_path()));
        // Scanning continued past the failure
        assert_eq!(result.results[1].message, "stylesheet");
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn check_count_sums_both_sets() {
        assert_eq!(scanner().check_count(), 2);
    }
}
