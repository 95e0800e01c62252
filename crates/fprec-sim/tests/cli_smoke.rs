use std::fs;
use std::process::Command;

use serde_json::Value;

fn fprec_sim(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_fprec-sim"))
        .args(args)
        .env("FPREC_LOG", "warn")
        .output()
        .expect("run fprec-sim");
    (
        output.status.success(),
        String::from_utf8(output.stdout).expect("utf8"),
    )
}

fn json(args: &[&str]) -> Value {
    let (ok, body) = fprec_sim(args);
    assert!(ok, "fprec-sim {args:?} failed");
    serde_json::from_str(&body).expect("json")
}

#[test]
fn bits_plain_renders_value() {
    let (ok, body) = fprec_sim(&["bits", "--value", "3.0", "--plain"]);
    assert!(ok);
    assert_eq!(body.trim(), "+1.10000000000000000000000*10^  1");
}

#[test]
fn bits_decodes_raw_patterns() {
    let value = json(&["bits", "--bits", "0x7f800000"]);
    assert_eq!(value["classification"], "infinity");
    assert_eq!(value["rendered"], "(inf)");
    let value = json(&["bits", "--bits", "0x1", "--precision", "double"]);
    assert_eq!(value["subnormal"], true);
    assert_eq!(value["view"]["class"], "double");
}

#[test]
fn sum_reports_provenance_and_errors() {
    let value = json(&["sum", "--count", "1000", "--trace-every", "500"]);
    let hash = value["provenance"]["config_hash"].as_str().expect("hash");
    assert_eq!(hash.len(), 64);
    assert_eq!(value["provenance"]["experiment"], "summation");
    let traces = value["report"]["traces"].as_array().expect("traces");
    assert_eq!(traces.len(), 2);
}

#[test]
fn absorb_reports_both_classes() {
    let value = json(&["absorb"]);
    let reports = value["report"].as_array().expect("reports");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["first_absorbed"], 8);
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("lab.yaml");
    fs::write(&path, "recurrence:\n  terms: 12\n").expect("write");
    let value = json(&["recur", "--config", path.to_str().expect("path")]);
    assert_eq!(value["report"]["rows"].as_array().map(Vec::len), Some(12));
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "order:\n  terms: 0\n").expect("write");
    let (ok, _) = fprec_sim(&["order", "--config", path.to_str().expect("path")]);
    assert!(!ok);
}

#[test]
fn version_prints_package_version() {
    let (ok, body) = fprec_sim(&["version"]);
    assert!(ok);
    assert_eq!(body.trim(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn flag_overrides_are_validated() {
    let rejected: [&[&str]; 6] = [
        &["orbit", "--time-limit", "inf", "--steps", "10"],
        &["oscillate", "--steps", "0"],
        &["sum", "--value", "inf", "--count", "3"],
        &["order", "--terms", "0"],
        &["absorb", "--single", "-1:5"],
        &["recur", "--terms", "1"],
    ];
    for args in rejected {
        let (ok, body) = fprec_sim(args);
        assert!(!ok, "fprec-sim {args:?} should fail");
        assert!(body.is_empty(), "fprec-sim {args:?} printed a report");
    }
}
