//! End-to-end tests driving the compiled binary.

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_binary_version() {
    let mut cmd = Command::cargo_bin("jmetrics-bin").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jmetrics"));
}

#[test]
fn test_binary_cc_on_project() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Demo.java"),
        "class Demo {\n    int twist(int n) {\n        if (n > 1) {\n            return n;\n        }\n        return 0;\n    }\n}\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("jmetrics-bin").unwrap();
    cmd.arg("cc")
        .arg(dir.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo.twist"));
}

#[test]
fn test_binary_analyze_reports_summary() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Demo.java"),
        "class Demo {\n    void spin(int n) {\n        for (int i = 0; i < n; i++) {}\n    }\n}\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("jmetrics-bin").unwrap();
    cmd.arg("analyze")
        .arg(dir.path())
        .arg("--sequential")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis summary"))
        .stdout(predicate::str::contains("O(n)"));
}
