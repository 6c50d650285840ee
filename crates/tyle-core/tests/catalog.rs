// this_file: crates/tyle-core/tests/catalog.rs

//! Catalog-wide checks against the published style table.

use tyle_core::{resolve, StyleKind, StyleVariant, UnderlineStyle, Weight};

/// (style, point size, line height with default flags, letter spacing at regular)
const TABLE: [(StyleKind, f32, f32, f32); 11] = [
    (StyleKind::Headline, 26.0, 38.0, -0.5),
    (StyleKind::Title1, 22.0, 32.0, -0.5),
    (StyleKind::Title2, 20.0, 30.0, 0.0),
    (StyleKind::Title3, 18.0, 24.0, 0.0),
    (StyleKind::Subtitle, 16.0, 28.0, 0.0),
    (StyleKind::Body1, 16.0, 24.0, 0.0),
    (StyleKind::Body2, 14.0, 20.0, 0.0),
    (StyleKind::Caption1, 12.0, 18.0, 0.0),
    (StyleKind::Caption2, 10.0, 18.0, 0.0),
    (StyleKind::Button1, 16.0, 24.0, 0.0),
    (StyleKind::Button2, 14.0, 20.0, 0.0),
];

fn all_weights() -> Vec<Weight> {
    let mut weights = Weight::NAMED.to_vec();
    weights.extend([Weight::Other(1), Weight::Other(450), Weight::Other(1000)]);
    weights
}

#[test]
fn test_table_matches_resolution() {
    for (kind, size, line_height, spacing) in TABLE {
        let style = resolve(kind.with_weight(Weight::Regular));
        assert_eq!(style.point_size, size, "{kind} point size");
        assert_eq!(style.line_height, line_height, "{kind} line height");
        assert_eq!(style.letter_spacing, spacing, "{kind} letter spacing");
        assert_eq!(style.underline, None, "{kind} underline");
    }
}

#[test]
fn test_every_style_and_weight_resolves() {
    for kind in StyleKind::ALL {
        for weight in all_weights() {
            let variant = kind.with_weight(weight);
            let style = resolve(variant);
            assert_eq!(variant.weight(), weight);
            assert_eq!(style.weight, weight);
            assert!(!style.font_family_name.is_empty());
            let ratio = style.line_height / style.point_size;
            assert!((style.paragraph_line_height_multiple() - ratio).abs() < 1e-6);
        }
    }
}

#[test]
fn test_face_names() {
    let cases = [
        (Weight::Bold, "Pretendard-Bold"),
        (Weight::Semibold, "Pretendard-SemiBold"),
        (Weight::Medium, "Pretendard-Medium"),
        (Weight::Regular, "Pretendard-Regular"),
        (Weight::Light, "Pretendard-Regular"),
        (Weight::Black, "Pretendard-Regular"),
        (Weight::Other(620), "Pretendard-Regular"),
    ];
    for (weight, name) in cases {
        assert_eq!(resolve(StyleVariant::title3(weight)).font_family_name, name);
    }
}

#[test]
fn test_numeric_weights_pick_named_faces() {
    let cases = [
        (Weight::Other(500), "Pretendard-Medium"),
        (Weight::Other(600), "Pretendard-SemiBold"),
        (Weight::Other(700), "Pretendard-Bold"),
    ];
    for (weight, name) in cases {
        assert_eq!(resolve(StyleVariant::title3(weight)).font_family_name, name);
    }
}

#[test]
fn test_body2_numeric_bold_matches_bold() {
    let named = resolve(StyleVariant::body2(Weight::Bold));
    let numeric = resolve(StyleVariant::body2(Weight::Other(700)));
    assert_eq!(numeric.font_family_name, "Pretendard-Bold");
    assert_eq!(numeric.letter_spacing, -0.5);
    assert_eq!(named, numeric);
}

#[test]
fn test_headline_bold_record() {
    let style = resolve(StyleVariant::headline(Weight::Bold));
    assert_eq!(style.font_family_name, "Pretendard-Bold");
    assert_eq!(style.point_size, 26.0);
    assert_eq!(style.line_height, 38.0);
    assert_eq!(style.letter_spacing, -0.5);
    assert_eq!(style.underline, None);
    assert!((style.paragraph_line_height_multiple() - 38.0 / 26.0).abs() < 1e-6);
}

#[test]
fn test_flagged_styles() {
    let body2 = resolve(StyleVariant::body2_with(Weight::Bold, false));
    assert_eq!((body2.line_height, body2.letter_spacing), (20.0, -0.5));

    let body2_long = resolve(StyleVariant::body2_with(Weight::Regular, true));
    assert_eq!((body2_long.line_height, body2_long.letter_spacing), (24.0, 0.0));

    let body2_long_bold = resolve(StyleVariant::body2_with(Weight::Bold, true));
    assert_eq!(
        (body2_long_bold.line_height, body2_long_bold.letter_spacing),
        (24.0, -0.5)
    );

    assert_eq!(
        resolve(StyleVariant::caption1_with(Weight::Medium, true)).underline,
        Some(UnderlineStyle::Single)
    );
    assert_eq!(
        resolve(StyleVariant::caption1_with(Weight::Medium, false)).underline,
        None
    );

    assert_eq!(
        resolve(StyleVariant::button2_with(Weight::Regular, true)).line_height,
        18.0
    );
    assert_eq!(
        resolve(StyleVariant::button2_with(Weight::Regular, false)).line_height,
        20.0
    );
}

#[test]
fn test_flags_do_not_move_point_size() {
    assert_eq!(StyleVariant::body2_with(Weight::Bold, true).point_size(), 14.0);
    assert_eq!(StyleVariant::caption1_with(Weight::Bold, true).point_size(), 12.0);
    assert_eq!(StyleVariant::button2_with(Weight::Bold, true).point_size(), 14.0);
}

#[test]
fn test_resolve_is_idempotent() {
    for kind in StyleKind::ALL {
        let variant = kind.with_weight(Weight::Semibold);
        assert_eq!(resolve(variant), resolve(variant));
        assert_eq!(variant.resolve(), resolve(variant));
    }
}

#[test]
fn test_resolve_from_many_threads() {
    let handles: Vec<_> = StyleKind::ALL
        .into_iter()
        .map(|kind| std::thread::spawn(move || resolve(kind.with_weight(Weight::Bold))))
        .collect();

    for (kind, handle) in StyleKind::ALL.into_iter().zip(handles) {
        let style = handle.join().expect("resolver thread panicked");
        assert_eq!(style, resolve(kind.with_weight(Weight::Bold)));
    }
}
