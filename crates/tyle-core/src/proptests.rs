use super::*;
use proptest::prelude::*;

fn any_weight() -> impl Strategy<Value = Weight> {
    prop_oneof![
        prop::sample::select(Weight::NAMED.to_vec()),
        (1u16..=1000).prop_map(Weight::Other),
    ]
}

fn build(kind: StyleKind, weight: Weight, flag: bool) -> StyleVariant {
    match kind {
        StyleKind::Body2 => StyleVariant::body2_with(weight, flag),
        StyleKind::Caption1 => StyleVariant::caption1_with(weight, flag),
        StyleKind::Button2 => StyleVariant::button2_with(weight, flag),
        other => other.with_weight(weight),
    }
}

fn any_variant() -> impl Strategy<Value = StyleVariant> {
    (
        prop::sample::select(StyleKind::ALL.to_vec()),
        any_weight(),
        any::<bool>(),
    )
        .prop_map(|(kind, weight, flag)| build(kind, weight, flag))
}

// Property: weight extraction hands back exactly what was supplied
proptest! {
    #[test]
    fn prop_weight_round_trips(variant in any_variant()) {
        let style = resolve(variant);
        prop_assert_eq!(style.weight, variant.weight());
    }
}

// Property: every resolved record is complete and finite
proptest! {
    #[test]
    fn prop_resolution_is_total(variant in any_variant()) {
        let style = resolve(variant);
        prop_assert!(style.font_family_name.starts_with("Pretendard-"));
        prop_assert!(style.point_size > 0.0);
        prop_assert!(style.line_height > 0.0);
        prop_assert!(style.letter_spacing.is_finite());
        prop_assert!(style.paragraph_line_height_multiple().is_finite());
    }
}

// Property: resolving twice gives field-for-field equal output
proptest! {
    #[test]
    fn prop_resolution_is_idempotent(variant in any_variant()) {
        prop_assert_eq!(resolve(variant), resolve(variant));
    }
}

// Property: the multiple is always line height over point size
proptest! {
    #[test]
    fn prop_multiple_matches_ratio(variant in any_variant()) {
        let style = resolve(variant);
        let expected = style.line_height / style.point_size;
        prop_assert!((style.paragraph_line_height_multiple() - expected).abs() < 1e-6);
    }
}

// Property: weights off the hundred steps use the regular face
proptest! {
    #[test]
    fn prop_unnamed_weights_use_regular_face(
        n in (1u16..=1000).prop_filter("off the hundred steps", |n| n % 100 != 0),
        kind in prop::sample::select(StyleKind::ALL.to_vec()),
    ) {
        let weight = Weight::Other(n);
        prop_assert_eq!(kind.with_weight(weight).font_name(), "Pretendard-Regular");
    }
}

// Property: a numeric hundred step resolves exactly like its named weight
proptest! {
    #[test]
    fn prop_numeric_weight_matches_named(
        kind in prop::sample::select(StyleKind::ALL.to_vec()),
        weight in prop::sample::select(Weight::NAMED.to_vec()),
        flag in any::<bool>(),
    ) {
        let named = resolve(build(kind, weight, flag));
        let numeric = resolve(build(kind, Weight::Other(weight.to_number()), flag));
        prop_assert_eq!(&named.font_family_name, &numeric.font_family_name);
        prop_assert_eq!(named, numeric);
    }
}

// Property: only an underlined caption1 is underlined
proptest! {
    #[test]
    fn prop_underline_only_on_caption1(variant in any_variant()) {
        let expected = matches!(variant, StyleVariant::Caption1 { is_underline: true, .. });
        prop_assert_eq!(resolve(variant).underline.is_some(), expected);
    }
}
