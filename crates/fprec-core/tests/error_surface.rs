use fprec_core::errors::{ErrorInfo, FprecError};
use fprec_core::{decompose, FieldView, FloatValue, PrecisionClass};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("class", "single")
        .with_context("reason", "example")
}

#[test]
fn precision_error_surface() {
    let err = FprecError::Precision(sample_info("P001", "width mismatch"));
    assert_eq!(err.info().code, "P001");
    assert!(err.info().context.contains_key("class"));
}

#[test]
fn config_error_surface() {
    let err = FprecError::Config(sample_info("C001", "bad yaml").with_hint("check indentation"));
    assert_eq!(err.info().code, "C001");
    assert!(err.to_string().contains("hint: check indentation"));
}

#[test]
fn io_and_serde_error_surface() {
    let io = FprecError::Io(sample_info("I001", "missing file"));
    let serde = FprecError::Serde(sample_info("S001", "schema mismatch"));
    assert_eq!(io.info().code, "I001");
    assert_eq!(serde.info().code, "S001");
}

#[test]
fn error_round_trips_through_json() {
    let err = FprecError::Precision(sample_info("P002", "overflow"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Precision\""));
    let decoded: FprecError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn decompose_rejects_mismatched_class() {
    let err = decompose(FloatValue::Double(1.0), PrecisionClass::Single).unwrap_err();
    assert!(matches!(err, FprecError::Precision(_)));
    assert_eq!(err.info().code, "precision_mismatch");
    assert_eq!(err.info().context.get("actual").map(String::as_str), Some("double"));
}

#[test]
fn from_bits_rejects_wide_patterns() {
    let err = FieldView::from_bits(1 << 40, PrecisionClass::Single).unwrap_err();
    assert_eq!(err.info().code, "precision_overflow");
    assert!(FieldView::from_bits(u64::MAX, PrecisionClass::Double).is_ok());
}
