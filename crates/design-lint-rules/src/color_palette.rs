//! Check that hex colors come from the configured palette.
//!
//! Scans every line for 6-digit (`#RRGGBB`) and 3-digit (`#RGB`) hex
//! colors and warns about any value not present verbatim in the flattened
//! palette. Known limitation: 3- and 6-digit forms of the same color are
//! not normalized, so `#FFF` warns even when `#FFFFFF` is allowed.

use design_lint_core::{Check, FileContext, GuidelineConfig, Severity, ValidationResult};
use regex::Regex;
use std::sync::OnceLock;

/// Check name for color-palette.
pub const NAME: &str = "color-palette";

const HEX_COLOR_PATTERN: &str = r"(?i)#(?:[0-9a-f]{6}|[0-9a-f]{3})";

static HEX_COLOR: OnceLock<Regex> = OnceLock::new();

fn hex_color() -> &'static Regex {
    HEX_COLOR.get_or_init(|| Regex::new(HEX_COLOR_PATTERN).expect("invalid regex pattern"))
}

/// Warns about hex colors outside the configured palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorPalette;

impl ColorPalette {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for ColorPalette {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Warns about hex colors not in the configured palette"
    }

    fn run(&self, ctx: &FileContext, config: &GuidelineConfig) -> Vec<ValidationResult> {
        let allowed = config.colors.allowed();
        let mut results = Vec::new();

        for (i, line) in ctx.lines.iter().enumerate() {
            for m in hex_color().find_iter(line) {
                if !allowed.contains(m.as_str()) {
                    results.push(
                        ValidationResult::new(
                            Severity::Warning,
                            format!("Color '{}' not in defined color palette", m.as_str()),
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
