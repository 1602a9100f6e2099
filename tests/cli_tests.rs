mod common;

use common::write_table_csv;
use regex::Regex;
use std::fs;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const CORNER_TAPS: [&str; 8] = [
    "--tap", "50,50", "--tap", "250,50", "--tap", "50,250", "--tap", "250,250",
];

struct TestContext {
    table: NamedTempFile,
}

impl TestContext {
    fn new() -> Self {
        Self {
            table: write_table_csv(|p| if p == "2580" { 5000 } else { 10 }),
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_pinsight"))
            .arg("--frequency")
            .arg(self.table.path())
            .args(args)
            .output()
            .expect("Failed to execute binary")
    }
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

#[test]
fn test_analyze_json_output() {
    let ctx = TestContext::new();
    let mut args = vec!["analyze", "--json", "--width", "300", "--height", "400"];
    args.extend_from_slice(&CORNER_TAPS);

    let out = ctx.run(&args);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["spatial"][0]["pin"], "1379");
    assert_eq!(json["spatial"].as_array().unwrap().len(), 10);
    assert_eq!(json["frequencyFiltered"].as_array().unwrap().len(), 10);
    assert_eq!(json["spatialWeight"], 0.5);
}

#[test]
fn test_analyze_tables_list_every_strategy() {
    let ctx = TestContext::new();
    let mut args = vec!["analyze", "--width", "300", "--height", "400"];
    args.extend_from_slice(&CORNER_TAPS);

    let out = ctx.run(&args);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let text = stdout(&out);
    for title in ["Spatial ranking", "Frequency-Filtered ranking", "Composite ranking"] {
        assert!(text.contains(title), "missing '{}' in:\n{}", title, text);
    }
    let blend = Regex::new(r"Composite blend: 50% spatial / 50% frequency").unwrap();
    assert!(blend.is_match(&text));
}

#[test]
fn test_flag_overrides_params_file() {
    let ctx = TestContext::new();
    let params = NamedTempFile::new().unwrap();
    fs::write(
        params.path(),
        r#"{ "model": { "sigma": 0.4 }, "ranking": { "limit": 4, "spatial_weight": 0.9 } }"#,
    )
    .unwrap();

    let mut args = vec![
        "analyze",
        "--json",
        "--width",
        "300",
        "--height",
        "400",
        "--spatial-weight",
        "0.0",
        "--params",
        params.path().to_str().unwrap(),
    ];
    args.extend_from_slice(&CORNER_TAPS);

    let out = ctx.run(&args);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["spatial"].as_array().unwrap().len(), 4);
    assert_eq!(json["spatialWeight"], 0.0);
    assert_eq!(json["composite"][0]["pin"], "2580");
}

#[test]
fn test_invalid_params_are_rejected() {
    let ctx = TestContext::new();
    let mut args = vec!["analyze", "--top-k", "11"];
    args.extend_from_slice(&CORNER_TAPS);

    let out = ctx.run(&args);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("top_k"));
}

#[test]
fn test_malformed_tap_is_a_usage_error() {
    let ctx = TestContext::new();
    let out = ctx.run(&["analyze", "--tap", "12;40"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("expected X,Y"));
}

#[test]
fn test_missing_table_fails_cleanly() {
    let out = Command::new(env!("CARGO_BIN_EXE_pinsight"))
        .args(["--frequency", "/definitely/not/here.csv", "analyze"])
        .args(CORNER_TAPS)
        .output()
        .unwrap();

    assert!(!out.status.success());
    assert!(stderr(&out).contains("Failed to load frequency data"));
}

#[test]
fn test_validate_prints_summary() {
    let ctx = TestContext::new();
    let out = ctx.run(&["validate", "--top", "3"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let text = stdout(&out);
    let pins_row = Regex::new(r"PINs\s*\|\s*10000").unwrap();
    assert!(pins_row.is_match(&text), "{}", text);
    assert!(text.contains("2580"));
    let max_row = Regex::new(r"Max count\s*\|\s*5000").unwrap();
    assert!(max_row.is_match(&text));
}

#[test]
fn test_sweep_walks_weights() {
    let ctx = TestContext::new();
    let mut args = vec!["sweep", "--steps", "4", "--width", "300", "--height", "400"];
    args.extend_from_slice(&CORNER_TAPS);

    let out = ctx.run(&args);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let text = stdout(&out);
    for w in ["0.00", "0.25", "0.50", "0.75", "1.00"] {
        assert!(text.contains(w), "weight {} missing", w);
    }
    assert!(text.contains("2580"));
    assert!(text.contains("1379"));
}
