//! Integration tests for the `topsis-ranker` binary.
//!
//! Each test runs the compiled binary against a source file in a temporary
//! directory and checks the exit code and what landed on stdout and stderr.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// =============================================================================
// Test Infrastructure
// =============================================================================

const EXIT_INVALID_INPUT: i32 = 2;
const EXIT_EXPORT: i32 = 3;
const EXIT_CONFIG: i32 = 4;

const PHONES: &str = "\
Model,Price,Battery,Weight
A,540,9,1.3
B,620,7,1.1
C,580,8,1.5
";

fn write_source(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("phones.csv");
    std::fs::write(&path, content).unwrap();
    path
}

/// Runs the binary with the phone criteria plus `extra` arguments.
fn run(input: &Path, weights: &str, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_topsis-ranker"))
        .arg("--input")
        .arg(input)
        .args(["--weights", weights, "--impacts", "-,+,-"])
        .args(extra)
        .env("RUST_LOG", "debug")
        .env_remove("TOPSIS__EXPORT__FORMAT")
        .env_remove("TOPSIS__EXPORT__SCORE_PRECISION")
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn ranked_csv_goes_to_stdout_and_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, PHONES);

    let output = run(&input, "3,2,1", &[]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "Model,Price,Battery,Weight,Topsis Score,Rank",
            "A,540,9,1.3,0.8132,1",
            "B,620,7,1.1,0.3207,3",
            "C,580,8,1.5,0.4210,2",
        ]
    );
    assert!(stderr(&output).contains("Parsed decision matrix"));
}

#[test]
fn weight_count_mismatch_exits_with_invalid_input() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, PHONES);

    let output = run(&input, "3,2", &[]);

    assert_eq!(output.status.code(), Some(EXIT_INVALID_INPUT));
    assert!(stderr(&output).contains("SHAPE_MISMATCH"));
    assert!(output.stdout.is_empty());
}

#[test]
fn source_without_rows_exits_with_invalid_input() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "Model,Price,Battery,Weight\n");

    let output = run(&input, "3,2,1", &[]);

    assert_eq!(output.status.code(), Some(EXIT_INVALID_INPUT));
    assert!(stderr(&output).contains("MALFORMED_INPUT"));
}

#[test]
fn unparsable_weight_is_rejected_before_the_source_is_read() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.csv");

    let output = run(&input, "3,x,1", &[]);

    assert_eq!(output.status.code(), Some(EXIT_INVALID_INPUT));
    assert!(stderr(&output).contains("--weights"));
}

#[test]
fn out_of_range_precision_exits_with_config_error() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, PHONES);

    let output = run(&input, "3,2,1", &["--precision", "40"]);

    assert_eq!(output.status.code(), Some(EXIT_CONFIG));
    assert!(output.stdout.is_empty());
}

#[test]
fn unwritable_output_exits_with_export_error() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, PHONES);
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let destination = blocker.join("ranked.csv");

    let output = run(&input, "3,2,1", &["--output", destination.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(EXIT_EXPORT));
    assert!(stderr(&output).contains("STORAGE_ERROR"));
    assert!(!destination.exists());
}

#[test]
fn json_format_writes_report_file() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, PHONES);
    let destination = dir.path().join("ranked.json");

    let output = run(
        &input,
        "3,2,1",
        &["--format", "json", "--output", destination.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(output.stdout.is_empty());
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&destination).unwrap()).unwrap();
    assert_eq!(report["entries"][0]["rank"], 1);
}
