//! Tests for CLI metrics output.

#![allow(clippy::unwrap_used, clippy::str_to_string)]

use jmetrics::commands::{run_cc, run_ck, run_hal, run_mi, CcOptions, MiOptions};
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;

fn project_tempdir() -> TempDir {
    tempfile::Builder::new().prefix("cli_test_").tempdir().unwrap()
}

fn write_sample(dir: &TempDir) {
    let file_path = dir.path().join("Sample.java");
    let mut file = File::create(file_path).unwrap();
    writeln!(
        file,
        "class Sample {{\n    int pick(int n) {{\n        if (n > 0) {{\n            return n;\n        }}\n        return 0;\n    }}\n}}"
    )
    .unwrap();
}

#[test]
fn test_cli_cc_table() {
    let dir = project_tempdir();
    write_sample(&dir);

    let mut buffer = Vec::new();
    let code = run_cc(
        &[dir.path().to_path_buf()],
        CcOptions {
            show_complexity: true,
            ..CcOptions::default()
        },
        &mut buffer,
    )
    .unwrap();

    assert_eq!(code, 0);
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Sample.pick"));
    assert!(output.contains('2')); // base 1 + if
    assert!(output.contains('A'));
}

#[test]
fn test_cli_cc_json() {
    let dir = project_tempdir();
    write_sample(&dir);

    let mut buffer = Vec::new();
    run_cc(
        &[dir.path().to_path_buf()],
        CcOptions {
            json: true,
            ..CcOptions::default()
        },
        &mut buffer,
    )
    .unwrap();

    let output = String::from_utf8(buffer).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed[0]["name"], "Sample.pick");
    assert_eq!(parsed[0]["complexity"], 2);
}

#[test]
fn test_cli_cc_fail_threshold() {
    let dir = project_tempdir();
    write_sample(&dir);

    let mut buffer = Vec::new();
    let code = run_cc(
        &[dir.path().to_path_buf()],
        CcOptions {
            fail_threshold: Some(1),
            ..CcOptions::default()
        },
        &mut buffer,
    )
    .unwrap();
    assert_eq!(code, 1);
}

#[test]
fn test_cli_mi_shows_level() {
    let dir = project_tempdir();
    write_sample(&dir);

    let mut buffer = Vec::new();
    let code = run_mi(
        &[dir.path().to_path_buf()],
        MiOptions {
            show: true,
            ..MiOptions::default()
        },
        &mut buffer,
    )
    .unwrap();

    assert_eq!(code, 0);
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Sample.pick"));
    assert!(
        output.contains("High") || output.contains("Moderate") || output.contains("Low"),
        "expected a maintainability level in: {output}"
    );
}

#[test]
fn test_cli_hal_json() {
    let dir = project_tempdir();
    write_sample(&dir);

    let mut buffer = Vec::new();
    run_hal(
        &[dir.path().to_path_buf()],
        true,
        Vec::new(),
        None,
        false,
        &mut buffer,
    )
    .unwrap();

    let output = String::from_utf8(buffer).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed[0]["name"], "Sample.pick");
    assert!(parsed[0]["volume"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_cli_ck_table() {
    let dir = project_tempdir();
    write_sample(&dir);

    let mut buffer = Vec::new();
    run_ck(
        &[dir.path().to_path_buf()],
        false,
        Vec::new(),
        None,
        false,
        &mut buffer,
    )
    .unwrap();

    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Sample"));
    assert!(output.contains("WMC"));
}

#[test]
fn test_cli_output_file() {
    let dir = project_tempdir();
    write_sample(&dir);
    let out_path = dir.path().join("report.json");

    let mut buffer = Vec::new();
    run_cc(
        &[dir.path().to_path_buf()],
        CcOptions {
            json: true,
            output_file: Some(out_path.to_string_lossy().to_string()),
            ..CcOptions::default()
        },
        &mut buffer,
    )
    .unwrap();

    assert!(buffer.is_empty());
    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("Sample.pick"));
}
