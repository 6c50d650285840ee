//! Output formats for resolved styles
//!
//! JSON for tools, aligned text for people.

use serde::Serialize;
use tyle_core::{
    error::{Result, TyleError},
    Font, FontSource, ResolvedStyle, StyleVariant,
};

/// One resolved style as it appears in JSON output
#[derive(Debug, Serialize)]
pub struct StyleReport {
    pub style: String,
    pub weight: String,
    pub font_family_name: String,
    pub point_size: f32,
    pub line_height: f32,
    pub letter_spacing: f32,
    pub underline: Option<String>,
    pub line_height_multiple: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontReport>,
}

/// The font actually selected for a style
#[derive(Debug, Serialize)]
pub struct FontReport {
    pub name: String,
    /// "named" or "fallback"
    pub source: String,
}

impl StyleReport {
    pub fn new(variant: &StyleVariant, style: &ResolvedStyle) -> Self {
        Self {
            style: variant.kind().name().to_string(),
            weight: style.weight.to_string(),
            font_family_name: style.font_family_name.clone(),
            point_size: style.point_size,
            line_height: style.line_height,
            letter_spacing: style.letter_spacing,
            underline: style.underline.map(|u| u.name().to_string()),
            line_height_multiple: style.paragraph_line_height_multiple(),
            font: None,
        }
    }

    pub fn with_font(mut self, font: &Font) -> Self {
        self.font = Some(FontReport {
            name: font.face.family_name().to_string(),
            source: match font.source {
                FontSource::Named => "named",
                FontSource::SystemFallback { .. } => "fallback",
            }
            .to_string(),
        });
        self
    }
}

pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| TyleError::Other(format!("JSON encoding failed: {e}")))
}

/// Column header for [`text_row`]
pub fn text_header() -> String {
    format!(
        "{:<10} {:<10} {:<22} {:>5} {:>6} {:>7} {:>8} {:<9}",
        "style", "weight", "face", "size", "line", "spacing", "multiple", "underline"
    )
}

pub fn text_row(report: &StyleReport) -> String {
    format!(
        "{:<10} {:<10} {:<22} {:>5} {:>6} {:>7} {:>8.4} {:<9}",
        report.style,
        report.weight,
        report.font_family_name,
        report.point_size,
        report.line_height,
        report.letter_spacing,
        report.line_height_multiple,
        report.underline.as_deref().unwrap_or("-"),
    )
    .trim_end()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tyle_core::Weight;

    #[test]
    fn test_report_fields() {
        let variant = StyleVariant::caption1_with(Weight::Medium, true);
        let report = StyleReport::new(&variant, &variant.resolve());
        assert_eq!(report.style, "caption1");
        assert_eq!(report.weight, "medium");
        assert_eq!(report.font_family_name, "Pretendard-Medium");
        assert_eq!(report.underline.as_deref(), Some("single"));
        assert!((report.line_height_multiple - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_json_omits_missing_font() {
        let variant = StyleVariant::headline(Weight::Bold);
        let json = to_json(&StyleReport::new(&variant, &variant.resolve()), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["style"], "headline");
        assert_eq!(value["point_size"], 26.0);
        assert_eq!(value["letter_spacing"], -0.5);
        assert!(value["underline"].is_null());
        assert!(value.get("font").is_none());
    }

    #[test]
    fn test_text_row_marks_no_underline() {
        let variant = StyleVariant::body1(Weight::Regular);
        let row = text_row(&StyleReport::new(&variant, &variant.resolve()));
        assert!(row.starts_with("body1"));
        assert!(row.contains("Pretendard-Regular"));
        assert!(row.ends_with('-'));
    }
}
