//! Check for semantic HTML usage in markup files.
//!
//! Two independent file-level heuristics: a `<div` count above 10
//! suggests divitis, and a file containing none of the landmark tags
//! (`header`, `nav`, `main`, `section`, `article`, `aside`, `footer`)
//! warns outright. Both can fire for the same file.

use design_lint_core::{Check, FileContext, GuidelineConfig, Severity, ValidationResult};

/// Check name for semantic-html.
pub const NAME: &str = "semantic-html";

/// Landmark tags that count as semantic structure.
const SEMANTIC_TAGS: &[&str] = &[
    "header", "nav", "main", "section", "article", "aside", "footer",
];

/// Threshold above which the `<div>` count is reported.
const DIV_COUNT_LIMIT: usize = 10;

/// Flags div-heavy markup and files without landmark elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticHtml;

impl SemanticHtml {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for SemanticHtml {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags div-heavy markup and missing landmark elements"
    }

    fn run(&self, ctx: &FileContext, _config: &GuidelineConfig) -> Vec<ValidationResult> {
        let mut results = Vec::new();

        let div_count: usize = ctx.lines.iter().map(|line| line.matches("<div").count()).sum();
        if div_count > DIV_COUNT_LIMIT {
            results.push(
                ValidationResult::new(
                    Severity::Info,
                    format!("Found {div_count} <div> tags; prefer semantic HTML elements"),
                )
                .with_file(ctx.path),
            );
        }

        let has_semantic = SEMANTIC_TAGS
            .iter()
            .any(|tag| ctx.content.contains(&format!("<{tag}")));
        if !has_semantic {
            results.push(
                ValidationResult::new(
                    Severity::Warning,
                    "No semantic HTML elements found (header, nav, main, section, article, aside, footer)",
                )
                .with_file(ctx.path),
            );
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn run_on(content: &str) -> Vec<ValidationResult> {
        let ctx = FileContext::new(Path::new("app.jsx"), content);
        SemanticHtml::new().run(&ctx, &GuidelineConfig::default())
    }

    #[test]
    fn eleven_divs_trigger_the_count_info() {
        let content = "<div>".repeat(11);
        let results = run_on(&content);
        let info = results
            .iter()
            .find(|r| r.severity == Severity::Info)
            .unwrap();
        assert_eq!(info.message, "Found 11 <div> tags; prefer semantic HTML elements");
    }

    #[test]
    fn ten_divs_do_not_trigger_the_count_info() {
        let content = format!("<main>{}</main>", "<div>".repeat(10));
        assert!(run_on(&content).is_empty());
    }

    #[test]
    fn missing_landmarks_warns() {
        let results = run_on("<div><span>hi</span></div>");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].severity, Severity::Warning);
        assert!(results[0].line.is_none());
    }

    #[test]
    fn any_landmark_suppresses_the_warning() {
        assert!(run_on("<nav><div>menu</div></nav>").is_empty());
        assert!(run_on("<footer />").is_empty());
    }

    #[test]
    fn both_findings_can_fire_together() {
        let content = "<div>".repeat(12);
        let results = run_on(&content);
        assert_eq!(results.len(), 2);
    }
}
