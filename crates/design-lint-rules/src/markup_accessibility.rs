//! Accessibility attribute checks for markup files.
//!
//! Matches against the joined file content, so tags split across lines
//! are seen as single units. Every `<img>` without an `alt=` attribute is
//! an error. Buttons whose text capture is blank get a warning citing
//! their 1-based occurrence index; the capture stops at the first `<`, so
//! a button wrapping only an icon element is flagged like an empty one.

use design_lint_core::{Check, FileContext, GuidelineConfig, Severity, ValidationResult};
use regex::Regex;
use std::sync::OnceLock;

/// Check name for markup-accessibility.
pub const NAME: &str = "markup-accessibility";

const IMG_TAG_PATTERN: &str = r"(?i)<img[^>]*?>";
const BUTTON_PATTERN: &str = r"(?is)<button[^>]*>([^<]*).*?</button>";

static IMG_TAG: OnceLock<Regex> = OnceLock::new();
static BUTTON: OnceLock<Regex> = OnceLock::new();

fn img_tag() -> &'static Regex {
    IMG_TAG.get_or_init(|| Regex::new(IMG_TAG_PATTERN).expect("invalid regex pattern"))
}

fn button() -> &'static Regex {
    BUTTON.get_or_init(|| Regex::new(BUTTON_PATTERN).expect("invalid regex pattern"))
}

/// Flags images without alt text and buttons without accessible text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupAccessibility;

impl MarkupAccessibility {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for MarkupAccessibility {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags images without alt text and buttons without accessible text"
    }

    fn run(&self, ctx: &FileContext, _config: &GuidelineConfig) -> Vec<ValidationResult> {
        let mut results = Vec::new();

        for m in img_tag().find_iter(ctx.content) {
            if !m.as_str().to_lowercase().contains("alt=") {
                results.push(
                    ValidationResult::new(Severity::Error, "Image tag missing alt attribute")
                        .with_file(ctx.path),
                );
            }
        }

        for (i, cap) in button().captures_iter(ctx.content).enumerate() {
            if cap[1].trim().is_empty() {
                results.push(
                    ValidationResult::new(
                        Severity::Warning,
                        format!(
                            "Button {} has no text content; add an aria-label for screen readers",
                            i + 1
                        ),
                    )
                    .with_file(ctx.path),
                );
            }
        }

        results
    }
}
