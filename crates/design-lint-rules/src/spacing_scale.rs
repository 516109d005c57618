//! Check that pixel values fit the configured spacing scale.
//!
//! Scans every line for integers immediately followed by `px`. Values in
//! the scale pass; values outside the scale pass as long as they are
//! evenly divisible by the base unit (the smallest scale value).

use design_lint_core::{Check, FileContext, GuidelineConfig, Severity, ValidationResult};
use regex::Regex;
use std::sync::OnceLock;

/// Check name for spacing-scale.
pub const NAME: &str = "spacing-scale";

const PIXEL_VALUE_PATTERN: &str = r"(\d+)px";

static PIXEL_VALUE: OnceLock<Regex> = OnceLock::new();

fn pixel_value() -> &'static Regex {
    PIXEL_VALUE.get_or_init(|| Regex::new(PIXEL_VALUE_PATTERN).expect("invalid regex pattern"))
}

/// Warns about pixel values off the spacing grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacingScale;

impl SpacingScale {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for SpacingScale {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Warns about pixel values not divisible by the spacing base unit"
    }

    fn run(&self, ctx: &FileContext, config: &GuidelineConfig) -> Vec<ValidationResult> {
        let Some(base) = config.spacing.base_unit() else {
            return Vec::new();
        };
        let mut results = Vec::new();

        for (i, line) in ctx.lines.iter().enumerate() {
            for cap in pixel_value().captures_iter(line) {
                let Ok(value) = cap[1].parse::<u32>() else {
                    continue;
                };
                if config.spacing.scale.contains(&value) {
                    continue;
                }
                if value % base != 0 {
                    results.push(
                        ValidationResult::new(
                            Severity::Warning,
                            format!("Spacing value '{value}px' not divisible by base unit {base}px"),
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn run_on(content: &str) -> Vec<ValidationResult> {
        let ctx = FileContext::new(Path::new("style.css"), content);
        SpacingScale::new().run(&ctx, &GuidelineConfig::default())
    }

    #[test]
    fn scale_value_passes() {
        assert!(run_on(".a { margin: 16px; }").is_empty());
    }

    #[test]
    fn off_scale_but_divisible_passes() {
        // 20 is not in [4,8,12,16,24,32,48,64] but 20 % 4 == 0
        assert!(run_on(".a { margin: 20px; }").is_empty());
    }

    #[test]
    fn non_divisible_value_warns() {
        let results = run_on(".a { padding: 13px; }");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].severity, Severity::Warning);
        assert_eq!(
            results[0].message,
            "Spacing value '13px' not divisible by base unit 4px"
        );
        assert_eq!(results[0].line, Some(1));
    }

    #[test]
    fn each_occurrence_checked() {
        let results = run_on(".a { margin: 7px 9px; }");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn empty_scale_disables_check() {
        let mut config = GuidelineConfig::default();
        config.spacing.scale.clear();
        let ctx = FileContext::new(Path::new("style.css"), ".a { margin: 13px; }");
        assert!(SpacingScale::new().run(&ctx, &config).is_empty());
    }

    #[test]
    fn scale_membership_beats_divisibility() {
        // A scale whose members are not all multiples of its minimum
        let mut config = GuidelineConfig::default();
        config.spacing.scale = vec![4, 10];
        let ctx = FileContext::new(Path::new("style.css"), ".a { margin: 10px; }");
        assert!(SpacingScale::new().run(&ctx, &config).is_empty());
    }
}
