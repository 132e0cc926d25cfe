use std::fs;
use std::path::{Path, PathBuf};

use antsniff_core::analyze_hex_file;
use serde_json::Value;

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn load_expected_report(dir: &str) -> Value {
    let expected_path = repo_root().join(dir).join("expected_report.json");
    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn run_golden(dir: &str) {
    let input = repo_root().join(dir).join("input.txt");
    let expected = load_expected_report(dir);

    let mut actual = analyze_hex_file(&input).expect("analyze capture");
    actual.generated_at = expected["generated_at"].as_str().unwrap_or_default().to_string();
    actual.input.path = expected["input"]["path"].as_str().unwrap_or_default().to_string();

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    assert_eq!(actual_value, expected, "golden mismatch in {dir}");
}

#[test]
fn golden_session() {
    run_golden("tests/golden/session");
}

#[test]
fn golden_malformed() {
    run_golden("tests/golden/malformed");
}

#[test]
fn golden_session_aliases_download_response() {
    let report = load_expected_report("tests/golden/session");
    let frame = &report["frames"][6];
    assert_eq!(frame["line"], 8);
    assert_eq!(frame["record"]["type"], "download request command");
    assert!(frame["record"].get("remaining").is_none());
}

#[test]
fn golden_malformed_keeps_failures_in_order() {
    let report = load_expected_report("tests/golden/malformed");
    let failed: Vec<u64> = report["frames"]
        .as_array()
        .expect("frames array")
        .iter()
        .filter(|frame| frame.get("error").is_some())
        .filter_map(|frame| frame["line"].as_u64())
        .collect();
    assert_eq!(failed, vec![2, 5, 6, 7, 8]);
    assert_eq!(report["summary"]["failed"], 5);
}
