//! Check font-size and font-weight declarations against the typography
//! configuration.
//!
//! Only integer `px` font sizes are compared against the allowed list;
//! `rem`/`em` and decimal sizes are never flagged. Font weights are only
//! compared when purely numeric, so keyword weights like `bold` pass.

use design_lint_core::{Check, FileContext, GuidelineConfig, Severity, ValidationResult};
use regex::Regex;
use std::sync::OnceLock;

/// Check name for typography-scale.
pub const NAME: &str = "typography-scale";

const FONT_SIZE_PATTERN: &str = r"font-size:\s*(\d+)(px|rem|em)";
const FONT_WEIGHT_PATTERN: &str = r"font-weight:\s*([a-zA-Z0-9]+)";

static FONT_SIZE: OnceLock<Regex> = OnceLock::new();
static FONT_WEIGHT: OnceLock<Regex> = OnceLock::new();

fn font_size() -> &'static Regex {
    FONT_SIZE.get_or_init(|| Regex::new(FONT_SIZE_PATTERN).expect("invalid regex pattern"))
}

fn font_weight() -> &'static Regex {
    FONT_WEIGHT.get_or_init(|| Regex::new(FONT_WEIGHT_PATTERN).expect("invalid regex pattern"))
}

/// Flags typography values outside the configured scales.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypographyScale;

impl TypographyScale {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for TypographyScale {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags font sizes and weights outside the typography scale"
    }

    fn run(&self, ctx: &FileContext, config: &GuidelineConfig) -> Vec<ValidationResult> {
        let mut results = Vec::new();

        for (i, line) in ctx.lines.iter().enumerate() {
            if let Some(cap) = font_size().captures(line) {
                let (value, unit) = (&cap[1], &cap[2]);
                if unit == "px" {
                    let size = format!("{value}{unit}");
                    if !config.typography.font_sizes.contains(&size) {
                        results.push(
                            ValidationResult::new(
                                Severity::Info,
                                format!("Font size '{size}' not in typography scale"),
                            )
                            .with_line(i + 1)
                            .with_file(ctx.path),
                        );
                    }
                }
            }

            if let Some(cap) = font_weight().captures(line) {
                let value = &cap[1];
                let numeric = !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
                if numeric && !config.typography.font_weights.contains(&value.to_string()) {
                    results.push(
                        ValidationResult::new(
                            Severity::Warning,
                            format!("Font weight '{value}' not in allowed font weights"),
                        )
                        .with_line(i + 1)
                        .with_file(ctx.path),
                    );
                }
            }
        }

        results
    }
}
