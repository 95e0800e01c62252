use fprec_core::{decompose, FieldView, FloatValue, IeeeFloat, PrecisionClass};
use proptest::prelude::*;

fn assert_round_trip<F: IeeeFloat>(value: F) {
    let view = decompose(value.into_value(), F::CLASS).expect("matching class");
    assert_eq!(view.to_bits(), value.to_raw_bits(), "value {value:?}");
    assert_eq!(view, FieldView::of(value));
}

#[test]
fn single_edge_values_round_trip() {
    for value in [
        0.0f32,
        -0.0,
        1.0,
        -1.5,
        f32::MIN_POSITIVE,
        f32::MAX,
        f32::MIN,
        f32::from_bits(1),
        f32::from_bits(0x007f_ffff),
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
        f32::from_bits(0xff80_0001),
    ] {
        assert_round_trip(value);
    }
}

#[test]
fn double_edge_values_round_trip() {
    for value in [
        0.0f64,
        -0.0,
        0.1,
        f64::MIN_POSITIVE,
        f64::MAX,
        f64::from_bits(1),
        f64::from_bits(0x000f_ffff_ffff_ffff),
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::from_bits(0x7ff0_0000_0000_0001),
    ] {
        assert_round_trip(value);
    }
}

#[test]
fn fields_of_known_values() {
    let view = FieldView::of(-2.0f32);
    assert!(view.sign);
    assert_eq!(view.exponent, 128);
    assert_eq!(view.fraction, 0);

    let view = FieldView::of(f64::from_bits(1));
    assert!(!view.sign);
    assert_eq!(view.exponent, 0);
    assert_eq!(view.fraction, 1);
    assert!(view.is_subnormal());
}

#[test]
fn to_value_restores_nan_payloads() {
    let nan = f32::from_bits(0x7fc0_1234);
    let view = FieldView::of(nan);
    match view.to_value() {
        FloatValue::Single(restored) => assert_eq!(restored.to_bits(), nan.to_bits()),
        other => panic!("unexpected class: {other:?}"),
    }
}

proptest! {
    #[test]
    fn single_bits_round_trip(bits in any::<u32>()) {
        let view = FieldView::from_bits(u64::from(bits), PrecisionClass::Single).unwrap();
        prop_assert_eq!(view.to_bits(), u64::from(bits));
        prop_assert_eq!(view, FieldView::of(f32::from_bits(bits)));
        prop_assert!(view.exponent <= 255);
        prop_assert!(view.fraction < (1 << 23));
    }

    #[test]
    fn double_bits_round_trip(bits in any::<u64>()) {
        let view = FieldView::from_bits(bits, PrecisionClass::Double).unwrap();
        prop_assert_eq!(view.to_bits(), bits);
        prop_assert_eq!(view.to_value().to_bits(), bits);
        prop_assert!(view.exponent <= 2047);
    }

    #[test]
    fn arbitrary_singles_round_trip(value in any::<f32>()) {
        assert_round_trip(value);
    }
}
