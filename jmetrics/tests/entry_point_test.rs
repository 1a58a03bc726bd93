//! Tests for the shared CLI entry point.

#![allow(clippy::unwrap_used, clippy::str_to_string)]

use jmetrics::commands::run_init;
use jmetrics::entry_point::run_with_args_to;
use std::fs;

#[test]
fn test_help_exits_zero() {
    let mut buffer = Vec::new();
    let code = run_with_args_to(vec!["--help".to_string()], &mut buffer).unwrap();
    assert_eq!(code, 0);
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("jmetrics"));
    assert!(output.contains("analyze"));
}

#[test]
fn test_unknown_flag_exits_one() {
    let mut buffer = Vec::new();
    let code = run_with_args_to(vec!["--definitely-not-a-flag".to_string()], &mut buffer).unwrap();
    assert_eq!(code, 1);
}

#[test]
fn test_cc_subcommand_through_entry_point() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Tiny.java"),
        "class Tiny {\n    void go() {}\n}\n",
    )
    .unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(
        vec![
            "cc".to_string(),
            dir.path().to_string_lossy().to_string(),
            "--show-complexity".to_string(),
        ],
        &mut buffer,
    )
    .unwrap();

    assert_eq!(code, 0);
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Tiny.go"));
}

#[test]
fn test_analyze_subcommand_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Tiny.java"),
        "class Tiny {\n    void go(int n) {\n        for (int i = 0; i < n; i++) {}\n    }\n}\n",
    )
    .unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(
        vec![
            "analyze".to_string(),
            dir.path().to_string_lossy().to_string(),
            "--json".to_string(),
        ],
        &mut buffer,
    )
    .unwrap();

    assert_eq!(code, 0);
    let output = String::from_utf8(buffer).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["summary"]["total_files"], 1);
    assert_eq!(parsed["summary"]["analyzed_files"], 1);
    assert_eq!(parsed["complexity"][0]["method"], "Tiny.go");
}

#[test]
fn test_init_writes_config() {
    let dir = tempfile::tempdir().unwrap();

    let mut buffer = Vec::new();
    let code = run_init(dir.path(), false, &mut buffer).unwrap();
    assert_eq!(code, 0);

    let written = fs::read_to_string(dir.path().join("jmetrics.toml")).unwrap();
    assert!(written.contains("[jmetrics]"));

    // Second run without --force refuses
    let mut buffer = Vec::new();
    let code = run_init(dir.path(), false, &mut buffer).unwrap();
    assert_eq!(code, 1);

    // --force overwrites
    let mut buffer = Vec::new();
    let code = run_init(dir.path(), true, &mut buffer).unwrap();
    assert_eq!(code, 0);
}
