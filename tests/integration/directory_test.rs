//! Integration tests that drive the jsoncat binary end to end

use serde_json::Value;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_jsoncat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jsoncat"))
        .args(args)
        .output()
        .expect("failed to run jsoncat")
}

#[test]
fn test_combine_directory_to_output_file() {
    let input = tempdir().unwrap();
    fs::write(input.path().join("a.json"), r#"{"id": 1}"#).unwrap();
    fs::write(input.path().join("b.json"), r#"{"id": 2}"#).unwrap();
    fs::write(input.path().join("notes.txt"), "hello").unwrap();

    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("combined.json");

    let result = run_jsoncat(&[
        input.path().to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Found 2 JSON files"), "stdout: {}", stdout);

    let array: Vec<Value> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(array.len(), 2);
}

#[test]
fn test_malformed_input_exits_nonzero_with_no_output() {
    let input = tempdir().unwrap();
    fs::write(input.path().join("good.json"), r#"{"id": 1}"#).unwrap();
    fs::write(input.path().join("zz_bad.json"), "{not json").unwrap();

    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("combined.json");

    let result = run_jsoncat(&[
        input.path().to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    assert!(!result.status.success());
    assert!(!output.exists(), "no partial output may be written");
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("parse error"), "stderr: {}", stderr);
}

#[test]
fn test_missing_input_directory_exits_nonzero() {
    let scratch = tempdir().unwrap();
    let missing = scratch.path().join("nope");
    let output = scratch.path().join("combined.json");

    let result = run_jsoncat(&[
        missing.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("directory"), "stderr: {}", stderr);
}

#[test]
fn test_quiet_suppresses_status_output() {
    let input = tempdir().unwrap();
    fs::write(input.path().join("a.json"), "1").unwrap();

    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("combined.json");

    let result = run_jsoncat(&[
        input.path().to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--quiet",
    ]);

    assert!(result.status.success());
    assert!(result.stdout.is_empty(), "stdout: {}", String::from_utf8_lossy(&result.stdout));
}

#[test]
fn test_stats_flag_prints_run_summary() {
    let input = tempdir().unwrap();
    fs::write(input.path().join("a.json"), r#"{"id": 1}"#).unwrap();

    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("combined.json");

    let result = run_jsoncat(&[
        input.path().to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--stats",
    ]);

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Combine Statistics"), "stdout: {}", stdout);
    assert!(stdout.contains("Files combined: 1"), "stdout: {}", stdout);
}

#[test]
fn test_validate_only_writes_no_output() {
    let input = tempdir().unwrap();
    fs::write(input.path().join("a.json"), r#"{"id": 1}"#).unwrap();

    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("combined.json");

    let result = run_jsoncat(&[
        input.path().to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--validate-only",
    ]);

    assert!(result.status.success());
    assert!(!output.exists());
}

#[test]
fn test_validate_only_fails_on_invalid_file() {
    let input = tempdir().unwrap();
    fs::write(input.path().join("good.json"), "[1]").unwrap();
    fs::write(input.path().join("zz_bad.json"), "{nope").unwrap();

    let result = run_jsoncat(&[input.path().to_str().unwrap(), "--validate-only", "--quiet"]);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("failed validation"), "stderr: {}", stderr);
}

#[test]
fn test_recursive_flag_includes_subdirectories() {
    let input = tempdir().unwrap();
    let sub = input.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(input.path().join("top.json"), "1").unwrap();
    fs::write(sub.join("below.json"), "2").unwrap();

    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("combined.json");

    let result = run_jsoncat(&[
        input.path().to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--recursive",
    ]);

    assert!(result.status.success());
    let array: Vec<Value> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(array.len(), 2);
}

#[test]
fn test_indent_zero_writes_compact_output() {
    let input = tempdir().unwrap();
    fs::write(input.path().join("a.json"), r#"{"id": 1}"#).unwrap();

    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("combined.json");

    let result = run_jsoncat(&[
        input.path().to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--indent",
        "0",
    ]);

    assert!(result.status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), r#"[{"id":1}]"#);
}

#[test]
fn test_invalid_indent_is_a_usage_error() {
    let input = tempdir().unwrap();

    let result = run_jsoncat(&[input.path().to_str().unwrap(), "--indent", "20"]);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("indent"), "stderr: {}", stderr);
}
