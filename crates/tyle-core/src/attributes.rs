//! Attribute assembly: a resolved style becomes a ready-to-draw attribute set
//!
//! This is the last step before the host lays text out. It pairs the
//! resolved numbers with an actual font from a [`FontProvider`] and packs
//! the paragraph settings the layout engine consumes.

use crate::style::{ResolvedStyle, StyleVariant, UnderlineStyle};
use crate::traits::{Font, FontProvider};

/// Paragraph-level layout settings for a text run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    /// Extra space between lines.
    ///
    /// Carries the style's letter-spacing value unchanged. This matches the
    /// established rendering of the catalog; hosts that want character
    /// tracking read [`ResolvedStyle::letter_spacing`] directly.
    pub line_spacing: f32,
    /// Line height as a multiple of the font's natural line height
    pub line_height_multiple: f32,
}

impl ParagraphStyle {
    pub fn from_style(style: &ResolvedStyle) -> Self {
        Self {
            line_spacing: style.letter_spacing,
            line_height_multiple: style.paragraph_line_height_multiple(),
        }
    }
}

/// The complete attribute set for one run of text
#[derive(Debug, Clone)]
pub struct TextAttributes {
    pub font: Font,
    pub paragraph: ParagraphStyle,
    pub underline: Option<UnderlineStyle>,
}

impl TextAttributes {
    /// Pair a resolved style with a font from `provider`.
    ///
    /// Never fails: an unavailable face is replaced per [`select_font`].
    pub fn assemble(style: &ResolvedStyle, provider: &dyn FontProvider) -> Self {
        Self {
            font: select_font(provider, style),
            paragraph: ParagraphStyle::from_style(style),
            underline: style.underline,
        }
    }
}

impl StyleVariant {
    /// Resolve this style and assemble its attributes in one step
    pub fn attributes(&self, provider: &dyn FontProvider) -> TextAttributes {
        TextAttributes::assemble(&self.resolve(), provider)
    }
}

/// Pick the font for a resolved style.
///
/// Asks the provider for the style's named face. If the provider cannot
/// load it, the provider's system font is used instead, at the style's
/// point size and with the weight the style was requested with.
pub fn select_font(provider: &dyn FontProvider, style: &ResolvedStyle) -> Font {
    match provider.font(&style.font_family_name, style.point_size) {
        Some(font) => font,
        None => {
            log::debug!(
                "{}: face {} unavailable, using system font at {}pt ({})",
                provider.name(),
                style.font_family_name,
                style.point_size,
                style.weight
            );
            provider.system_font(style.point_size, style.weight)
        },
    }
}
