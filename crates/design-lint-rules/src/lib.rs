//! # design-lint-rules
//!
//! Built-in guideline checks for design-lint.
//!
//! ## Available checks
//!
//! | Name | Files | Description |
//! |------|-------|-------------|
//! | `color-palette` | stylesheets | Warns about hex colors not in the configured palette |
//! | `spacing-scale` | stylesheets | Warns about pixel values off the spacing grid |
//! | `typography-scale` | stylesheets | Flags font sizes/weights outside the typography scale |
//! | `stylesheet-accessibility` | stylesheets | Flags removed focus outlines and color-only styling |
//! | `semantic-html` | markup | Flags div-heavy markup and missing landmark elements |
//! | `markup-accessibility` | markup | Flags images without alt text and textless buttons |
//!
//! ## Usage
//!
//! ```ignore
//! use design_lint_core::Scanner;
//! use design_lint_rules::{markup_checks, stylesheet_checks};
//!
//! let scanner = Scanner::builder()
//!     .stylesheet_checks(stylesheet_checks())
//!     .markup_checks(markup_checks())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod check_sets;
mod color_palette;
mod markup_accessibility;
mod semantic_html;
mod spacing_scale;
mod stylesheet_accessibility;
mod typography_scale;

pub use check_sets::{markup_checks, stylesheet_checks};
pub use color_palette::ColorPalette;
pub use markup_accessibility::MarkupAccessibility;
pub use semantic_html::SemanticHtml;
pub use spacing_scale::SpacingScale;
pub use stylesheet_accessibility::StylesheetAccessibility;
pub use typography_scale::TypographyScale;

/// Re-export core types for convenience.
pub use design_lint_core::{Check, Severity, ValidationResult};
