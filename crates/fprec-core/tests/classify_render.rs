use fprec_core::{
    classify, decompose, describe, render, Classification, FieldView, FloatValue, PrecisionClass,
};
use proptest::prelude::*;

#[test]
fn specials_are_classified() {
    assert_eq!(FieldView::of(0.0f32).classify(), Classification::Zero);
    assert_eq!(FieldView::of(-0.0f32).classify(), Classification::Zero);
    assert_eq!(FieldView::of(0.0f64).classify(), Classification::Zero);
    assert_eq!(FieldView::of(-0.0f64).classify(), Classification::Zero);
    assert_eq!(FieldView::of(f32::INFINITY).classify(), Classification::Infinity);
    assert_eq!(FieldView::of(f64::NEG_INFINITY).classify(), Classification::Infinity);
    assert_eq!(FieldView::of(f32::NAN).classify(), Classification::Nan);
    // signalling NaN: quiet bit clear, payload nonzero
    assert_eq!(
        FieldView::of(f32::from_bits(0x7f80_0001)).classify(),
        Classification::Nan
    );
    assert_eq!(
        FieldView::of(f64::from_bits(0xfff8_0000_0000_0000)).classify(),
        Classification::Nan
    );
}

#[test]
fn subnormals_are_reported_normal() {
    let view = FieldView::of(f32::from_bits(3));
    assert!(view.is_subnormal());
    assert_eq!(classify(&view), Classification::Normal);
}

#[test]
fn renders_three_in_single_precision() {
    let view = decompose(FloatValue::Single(3.0), PrecisionClass::Single).unwrap();
    assert!(!view.sign);
    assert_eq!(view.exponent, 128);
    assert_eq!(view.fraction, 1 << 22);
    assert_eq!(
        render(&view, classify(&view)),
        "+1.10000000000000000000000*10^  1"
    );
}

#[test]
fn renders_one_and_a_half() {
    assert_eq!(describe(1.5f32), "+1.10000000000000000000000*10^  0");
    assert_eq!(describe(-0.75f32), "-1.10000000000000000000000*10^ -1");
}

#[test]
fn renders_double_precision() {
    assert_eq!(
        describe(1.0f64),
        format!("+1.{}*10^  0", "0".repeat(52))
    );
    assert_eq!(
        describe(-1024.0f64),
        format!("-1.{}*10^ 10", "0".repeat(52))
    );
}

#[test]
fn renders_wide_exponents_without_truncation() {
    assert_eq!(describe(f32::MIN_POSITIVE), format!("+1.{}*10^-126", "0".repeat(23)));
    assert_eq!(describe(f32::MAX), format!("+1.{}*10^127", "1".repeat(23)));
}

#[test]
fn subnormals_render_with_leading_one() {
    let expected = format!("+1.{}1*10^-127", "0".repeat(22));
    assert_eq!(describe(f32::from_bits(1)), expected);
}

#[test]
fn special_tokens() {
    assert_eq!(describe(0.0f32), "(zero)");
    assert_eq!(describe(-0.0f64), "(zero)");
    assert_eq!(describe(f32::NEG_INFINITY), "(inf)");
    assert_eq!(describe(f64::NAN), "(nan)");
}

#[test]
fn display_matches_render() {
    let view = FieldView::of(0.1f32);
    assert_eq!(view.to_string(), render(&view, view.classify()));
}

proptest! {
    #[test]
    fn classification_agrees_with_std(value in any::<f64>()) {
        let class = FieldView::of(value).classify();
        let expected = if value.is_nan() {
            Classification::Nan
        } else if value.is_infinite() {
            Classification::Infinity
        } else if value == 0.0 {
            Classification::Zero
        } else {
            Classification::Normal
        };
        prop_assert_eq!(class, expected);
    }

    #[test]
    fn normal_render_grammar(bits in any::<u32>()) {
        let view = FieldView::of(f32::from_bits(bits));
        prop_assume!(view.classify() == Classification::Normal);
        let text = view.to_string();
        let prefix = if view.sign { "-1." } else { "+1." };
        prop_assert!(text.starts_with(prefix));
        let (mantissa, exponent) = text.split_once("*10^").unwrap();
        prop_assert_eq!(mantissa.len(), 3 + 23);
        prop_assert!(mantissa[3..].chars().all(|c| c == '0' || c == '1'));
        prop_assert!(exponent.len() >= 3);
        prop_assert_eq!(exponent.trim_start().parse::<i32>().unwrap(), view.unbiased_exponent());
    }
}
