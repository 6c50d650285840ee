//! The style catalog: every named text style and how it resolves
//!
//! A [`StyleVariant`] names one of eleven fixed styles and carries the
//! weight (plus any style-specific flag) it was requested with.
//! [`resolve`] turns it into a [`ResolvedStyle`]: the family name, point
//! size, line height, spacing, and underline a text run should use.
//!
//! Each table below is an exhaustive match on the style, so a new case does
//! not compile until every table knows about it.
//!
//! ```
//! use tyle_core::{resolve, StyleVariant, Weight};
//!
//! let style = resolve(StyleVariant::Headline(Weight::Bold));
//! assert_eq!(style.font_family_name, "Pretendard-Bold");
//! assert_eq!(style.point_size, 26.0);
//! assert_eq!(style.line_height, 38.0);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::TyleError;
use crate::weight::Weight;

/// Family prefix shared by every face the catalog asks for
pub const FONT_FAMILY: &str = "Pretendard";

/// A named text style together with the parameters it was requested with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleVariant {
    Headline(Weight),
    Title1(Weight),
    Title2(Weight),
    Title3(Weight),
    Subtitle(Weight),
    Body1(Weight),
    /// Long-form body copy gets a taller line
    Body2 { weight: Weight, is_long: bool },
    Caption1 { weight: Weight, is_underline: bool },
    Caption2(Weight),
    Button1(Weight),
    /// Bold small buttons tighten their line
    Button2 { weight: Weight, is_bold: bool },
}

/// Which style a variant is, without its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Headline,
    Title1,
    Title2,
    Title3,
    Subtitle,
    Body1,
    Body2,
    Caption1,
    Caption2,
    Button1,
    Button2,
}

/// How text under a style is underlined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnderlineStyle {
    Single,
}

impl UnderlineStyle {
    /// Value the platform text attribute expects for this underline
    pub const fn raw_value(self) -> u32 {
        match self {
            UnderlineStyle::Single => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            UnderlineStyle::Single => "single",
        }
    }
}

/// Everything a style resolves to
///
/// Built fresh by [`resolve`] for each use and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font_family_name: String,
    /// The weight the style was requested with, kept for font fallback
    pub weight: Weight,
    pub point_size: f32,
    pub line_height: f32,
    pub letter_spacing: f32,
    pub underline: Option<UnderlineStyle>,
}

impl ResolvedStyle {
    /// Line height relative to the point size, for scaling a font's natural
    /// line spacing
    pub fn paragraph_line_height_multiple(&self) -> f32 {
        self.line_height / self.point_size
    }
}

/// Resolve a style into its full attribute set.
///
/// Pure and total: every variant and weight yields a complete record.
pub fn resolve(variant: StyleVariant) -> ResolvedStyle {
    ResolvedStyle {
        font_family_name: variant.font_name(),
        weight: variant.weight(),
        point_size: variant.point_size(),
        line_height: variant.line_height(),
        letter_spacing: variant.letter_spacing(),
        underline: variant.underline(),
    }
}

/// PostScript name of the catalog face for a weight.
///
/// Only bold, semibold, medium and regular have their own face; every other
/// weight uses the regular one. Numeric weights count as their named step.
pub fn font_name_for(weight: Weight) -> String {
    let face = match weight.canonical() {
        Weight::Bold => "Bold",
        Weight::Semibold => "SemiBold",
        Weight::Medium => "Medium",
        Weight::Regular => "Regular",
        _ => "Regular",
    };
    format!("{FONT_FAMILY}-{face}")
}

impl StyleVariant {
    pub const fn headline(weight: Weight) -> Self {
        StyleVariant::Headline(weight)
    }

    pub const fn title1(weight: Weight) -> Self {
        StyleVariant::Title1(weight)
    }

    pub const fn title2(weight: Weight) -> Self {
        StyleVariant::Title2(weight)
    }

    pub const fn title3(weight: Weight) -> Self {
        StyleVariant::Title3(weight)
    }

    pub const fn subtitle(weight: Weight) -> Self {
        StyleVariant::Subtitle(weight)
    }

    pub const fn body1(weight: Weight) -> Self {
        StyleVariant::Body1(weight)
    }

    /// Body2 with `is_long = false`
    pub const fn body2(weight: Weight) -> Self {
        Self::body2_with(weight, false)
    }

    pub const fn body2_with(weight: Weight, is_long: bool) -> Self {
        StyleVariant::Body2 { weight, is_long }
    }

    /// Caption1 with `is_underline = false`
    pub const fn caption1(weight: Weight) -> Self {
        Self::caption1_with(weight, false)
    }

    pub const fn caption1_with(weight: Weight, is_underline: bool) -> Self {
        StyleVariant::Caption1 {
            weight,
            is_underline,
        }
    }

    pub const fn caption2(weight: Weight) -> Self {
        StyleVariant::Caption2(weight)
    }

    pub const fn button1(weight: Weight) -> Self {
        StyleVariant::Button1(weight)
    }

    /// Button2 with `is_bold = false`
    pub const fn button2(weight: Weight) -> Self {
        Self::button2_with(weight, false)
    }

    pub const fn button2_with(weight: Weight, is_bold: bool) -> Self {
        StyleVariant::Button2 { weight, is_bold }
    }

    /// The weight this variant carries, whichever style it is
    pub const fn weight(&self) -> Weight {
        match *self {
            StyleVariant::Headline(weight)
            | StyleVariant::Title1(weight)
            | StyleVariant::Title2(weight)
            | StyleVariant::Title3(weight)
            | StyleVariant::Subtitle(weight)
            | StyleVariant::Body1(weight)
            | StyleVariant::Body2 { weight, .. }
            | StyleVariant::Caption1 { weight, .. }
            | StyleVariant::Caption2(weight)
            | StyleVariant::Button1(weight)
            | StyleVariant::Button2 { weight, .. } => weight,
        }
    }

    pub const fn kind(&self) -> StyleKind {
        match self {
            StyleVariant::Headline(_) => StyleKind::Headline,
            StyleVariant::Title1(_) => StyleKind::Title1,
            StyleVariant::Title2(_) => StyleKind::Title2,
            StyleVariant::Title3(_) => StyleKind::Title3,
            StyleVariant::Subtitle(_) => StyleKind::Subtitle,
            StyleVariant::Body1(_) => StyleKind::Body1,
            StyleVariant::Body2 { .. } => StyleKind::Body2,
            StyleVariant::Caption1 { .. } => StyleKind::Caption1,
            StyleVariant::Caption2(_) => StyleKind::Caption2,
            StyleVariant::Button1(_) => StyleKind::Button1,
            StyleVariant::Button2 { .. } => StyleKind::Button2,
        }
    }

    pub fn font_name(&self) -> String {
        font_name_for(self.weight())
    }

    /// Point size depends on the style alone
    pub const fn point_size(&self) -> f32 {
        match self.kind() {
            StyleKind::Headline => 26.0,
            StyleKind::Title1 => 22.0,
            StyleKind::Title2 => 20.0,
            StyleKind::Title3 => 18.0,
            StyleKind::Subtitle => 16.0,
            StyleKind::Body1 => 16.0,
            StyleKind::Body2 => 14.0,
            StyleKind::Caption1 => 12.0,
            StyleKind::Caption2 => 10.0,
            StyleKind::Button1 => 16.0,
            StyleKind::Button2 => 14.0,
        }
    }

    pub const fn line_height(&self) -> f32 {
        match *self {
            StyleVariant::Headline(_) => 38.0,
            StyleVariant::Title1(_) => 32.0,
            StyleVariant::Title2(_) => 30.0,
            StyleVariant::Title3(_) => 24.0,
            StyleVariant::Subtitle(_) => 28.0,
            StyleVariant::Body1(_) => 24.0,
            StyleVariant::Body2 { is_long, .. } => {
                if is_long {
                    24.0
                } else {
                    20.0
                }
            },
            StyleVariant::Caption1 { .. } | StyleVariant::Caption2(_) => 18.0,
            StyleVariant::Button1(_) => 24.0,
            StyleVariant::Button2 { is_bold, .. } => {
                if is_bold {
                    18.0
                } else {
                    20.0
                }
            },
        }
    }

    pub fn letter_spacing(&self) -> f32 {
        match *self {
            StyleVariant::Headline(_) | StyleVariant::Title1(_) => -0.5,
            StyleVariant::Body2 { weight, .. } => {
                if weight == Weight::Bold {
                    -0.5
                } else {
                    0.0
                }
            },
            StyleVariant::Title2(_)
            | StyleVariant::Title3(_)
            | StyleVariant::Subtitle(_)
            | StyleVariant::Body1(_)
            | StyleVariant::Caption1 { .. }
            | StyleVariant::Caption2(_)
            | StyleVariant::Button1(_)
            | StyleVariant::Button2 { .. } => 0.0,
        }
    }

    pub const fn underline(&self) -> Option<UnderlineStyle> {
        match *self {
            StyleVariant::Caption1 {
                is_underline: true, ..
            } => Some(UnderlineStyle::Single),
            StyleVariant::Caption1 {
                is_underline: false,
                ..
            }
            | StyleVariant::Headline(_)
            | StyleVariant::Title1(_)
            | StyleVariant::Title2(_)
            | StyleVariant::Title3(_)
            | StyleVariant::Subtitle(_)
            | StyleVariant::Body1(_)
            | StyleVariant::Body2 { .. }
            | StyleVariant::Caption2(_)
            | StyleVariant::Button1(_)
            | StyleVariant::Button2 { .. } => None,
        }
    }

    pub fn resolve(&self) -> ResolvedStyle {
        resolve(*self)
    }
}

impl StyleKind {
    /// The whole catalog, largest style first
    pub const ALL: [StyleKind; 11] = [
        StyleKind::Headline,
        StyleKind::Title1,
        StyleKind::Title2,
        StyleKind::Title3,
        StyleKind::Subtitle,
        StyleKind::Body1,
        StyleKind::Body2,
        StyleKind::Caption1,
        StyleKind::Caption2,
        StyleKind::Button1,
        StyleKind::Button2,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            StyleKind::Headline => "headline",
            StyleKind::Title1 => "title1",
            StyleKind::Title2 => "title2",
            StyleKind::Title3 => "title3",
            StyleKind::Subtitle => "subtitle",
            StyleKind::Body1 => "body1",
            StyleKind::Body2 => "body2",
            StyleKind::Caption1 => "caption1",
            StyleKind::Caption2 => "caption2",
            StyleKind::Button1 => "button1",
            StyleKind::Button2 => "button2",
        }
    }

    /// Build the variant for this style with every flag at its default
    pub const fn with_weight(self, weight: Weight) -> StyleVariant {
        match self {
            StyleKind::Headline => StyleVariant::headline(weight),
            StyleKind::Title1 => StyleVariant::title1(weight),
            StyleKind::Title2 => StyleVariant::title2(weight),
            StyleKind::Title3 => StyleVariant::title3(weight),
            StyleKind::Subtitle => StyleVariant::subtitle(weight),
            StyleKind::Body1 => StyleVariant::body1(weight),
            StyleKind::Body2 => StyleVariant::body2(weight),
            StyleKind::Caption1 => StyleVariant::caption1(weight),
            StyleKind::Caption2 => StyleVariant::caption2(weight),
            StyleKind::Button1 => StyleVariant::button1(weight),
            StyleKind::Button2 => StyleVariant::button2(weight),
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleKind {
    type Err = TyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        StyleKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| TyleError::UnknownStyle(s.to_string()))
    }
}

impl fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}", self.kind(), self.weight())?;
        match *self {
            StyleVariant::Body2 { is_long: true, .. } => f.write_str(", long")?,
            StyleVariant::Caption1 {
                is_underline: true, ..
            } => f.write_str(", underline")?,
            StyleVariant::Button2 { is_bold: true, .. } => f.write_str(", bold")?,
            _ => {},
        }
        f.write_str(")")
    }
}
