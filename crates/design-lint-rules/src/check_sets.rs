//! Fixed check sets run per file type.

use design_lint_core::CheckBox;

use crate::color_palette::ColorPalette;
use crate::markup_accessibility::MarkupAccessibility;
use crate::semantic_html::SemanticHtml;
use crate::spacing_scale::SpacingScale;
use crate::stylesheet_accessibility::StylesheetAccessibility;
use crate::typography_scale::TypographyScale;

/// Returns the checks run over stylesheet files, in order.
#[must_use]
pub fn stylesheet_checks() -> Vec<CheckBox> {
    vec![
        Box::new(ColorPalette::new()),
        Box::new(SpacingScale::new()),
        Box::new(TypographyScale::new()),
        Box::new(StylesheetAccessibility::new()),
    ]
}

/// Returns the checks run over markup files, in order.
#[must_use]
pub fn markup_checks() -> Vec<CheckBox> {
    vec![
        Box::new(SemanticHtml::new()),
        Box::new(MarkupAccessibility::new()),
    ]
}
