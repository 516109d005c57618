//! Check trait shared by all guideline checks.

use crate::config::GuidelineConfig;
use crate::context::FileContext;
use crate::types::ValidationResult;

/// A single guideline check over one file.
///
/// Checks are independent: each receives the file context and the merged
/// configuration and returns its own findings. The scanner runs a fixed
/// ordered list of them per file type; there is no dynamic registry.
///
/// # Example
///
/// ```ignore
/// use design_lint_core::{Check, FileContext, GuidelineConfig, Severity, ValidationResult};
///
/// pub struct NoImportant;
///
/// impl Check for NoImportant {
///     fn name(&self) -> &'static str { "no-important" }
///
///     fn run(&self, ctx: &FileContext, _config: &GuidelineConfig) -> Vec<ValidationResult> {
///         ctx.lines
///             .iter()
///             .enumerate()
///             .filter(|(_, line)| line.contains("!important"))
///             .map(|(i, _)| {
///                 ValidationResult::new(Severity::Warning, "avoid !important")
///                     .with_line(i + 1)
///                     .with_file(ctx.path)
///             })
///             .collect()
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Returns the kebab-case name of this check (e.g., "color-palette").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this check looks for.
    fn description(&self) -> &'static str {
        ""
    }

    /// Runs the check over one file and returns any findings.
    fn run(&self, ctx: &FileContext, config: &GuidelineConfig) -> Vec<ValidationResult>;
}

/// Type alias for boxed Check trait objects.
pub type CheckBox = Box<dyn Check>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;
    use std::path::Path;

    struct TestCheck;

    impl Check for TestCheck {
        fn name(&self) -> &'static str {
            "test-check"
        }
        fn description(&self) -> &'static str {
            "A test check"
        }

        fn run(&self, ctx: &FileContext, _config: &GuidelineConfig) -> Vec<ValidationResult> {
            vec![ValidationResult::new(Severity::Info, "found something")
                .with_line(1)
                .with_file(ctx.path)]
        }
    }

    #[test]
    fn check_trait_is_object_safe() {
        let check: CheckBox = Box::new(TestCheck);
        let ctx = FileContext::new(Path::new("a.css"), "body {}");
        let results = check.run(&ctx, &GuidelineConfig::default());
        assert_eq!(check.name(), "test-check");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].file.as_deref(), Some(Path::new("a.css")));
    }
}
