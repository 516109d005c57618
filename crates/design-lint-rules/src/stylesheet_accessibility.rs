//! Accessibility heuristics over a whole stylesheet.
//!
//! Two file-level checks: `outline: none` with no `:focus` selector
//! anywhere removes keyboard focus visibility outright and is an error;
//! any `color:` declaration with a 6-digit hex value triggers a single
//! reminder that information should not be conveyed by color alone.

use design_lint_core::{Check, FileContext, GuidelineConfig, Severity, ValidationResult};
use regex::Regex;
use std::sync::OnceLock;

/// Check name for stylesheet-accessibility.
pub const NAME: &str = "stylesheet-accessibility";

const HEX_COLOR_DECL_PATTERN: &str = r"color:\s*#[0-9a-fA-F]{6}";

static HEX_COLOR_DECL: OnceLock<Regex> = OnceLock::new();

fn hex_color_decl() -> &'static Regex {
    HEX_COLOR_DECL
        .get_or_init(|| Regex::new(HEX_COLOR_DECL_PATTERN).expect("invalid regex pattern"))
}

/// File-level accessibility heuristics for stylesheets.
#[derive(Debug, Clone, Copy, Default)]
pub struct StylesheetAccessibility;

impl StylesheetAccessibility {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for StylesheetAccessibility {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags removed focus outlines and color-only styling"
    }

    fn run(&self, ctx: &FileContext, _config: &GuidelineConfig) -> Vec<ValidationResult> {
        let mut results = Vec::new();

        let removes_outline = ctx.lines.iter().any(|line| {
            let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            compact.contains("outline:none")
        });
        let has_focus_styles = ctx.lines.iter().any(|line| line.contains(":focus"));

        if removes_outline && !has_focus_styles {
            results.push(
                ValidationResult::new(
                    Severity::Error,
                    "'outline: none' used without any ':focus' styles; keyboard focus becomes invisible",
                )
                .with_file(ctx.path),
            );
        }

        // Fires regardless of palette membership
        if ctx.lines.iter().any(|line| hex_color_decl().is_match(line)) {
            results.push(
                ValidationResult::new(
                    Severity::Info,
                    "Consider adding non-color indicators (icons, borders, underlines) for better accessibility",
                )
                .with_file(ctx.path),
            );
        }

        results
    }
}
