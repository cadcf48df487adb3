//! Smoke tests for the ballast CLI.
//!
//! These tests verify the offline schema tooling:
//! - `ballast --version` / `--help` output
//! - `ballast dump` emits valid JSON
//! - `ballast schema names|order|generate` agree with the checked-in
//!   artifacts

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the ballast binary.
fn ballast() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ballast"))
}

fn stdout_lines(args: &[&str]) -> Vec<String> {
    let output = ballast().args(args).output().expect("binary runs");
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .expect("utf-8 output")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_version_flag() {
    ballast()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ballast"))
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_help_flag() {
    ballast()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn test_dump_outputs_valid_json() {
    let output = ballast().arg("dump").output().expect("binary runs");
    assert!(output.status.success());
    let snapshot: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(snapshot["mode"], serde_json::json!("online"));
    assert_eq!(snapshot["run_mode"], serde_json::json!("run"));
    assert!(snapshot["base_url"].is_string());
}

#[test]
fn test_schema_names_lists_sorted_names() {
    let names = stdout_lines(&["schema", "names"]);
    assert!(names.contains(&"base_url".to_string()));
    assert!(names.contains(&"summary_warnings".to_string()));
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_schema_order_puts_dependencies_first() {
    let order = stdout_lines(&["schema", "order"]);
    let position = |name: &str| {
        order
            .iter()
            .position(|line| line == name)
            .unwrap_or_else(|| panic!("{name} missing"))
    };
    assert!(position("root_dir") < position("stage_dir"));
    assert!(position("stage_dir") < position("files_dir"));
    assert!(position("log_dir") < position("log_user"));
}

#[test]
fn test_schema_generate_matches_checked_in_module() {
    let output = ballast()
        .args(["schema", "generate"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    let rendered = String::from_utf8(output.stdout).expect("utf-8 output");
    assert_eq!(rendered, include_str!("../src/schema/generated.rs"));
}

#[test]
fn test_schema_generate_out_writes_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("generated.rs");
    ballast()
        .args(["schema", "generate", "--out"])
        .arg(&path)
        .assert()
        .success();
    let written = std::fs::read_to_string(&path).expect("file written");
    assert!(written.contains("SETTING_NAMES"));
    assert!(written.contains("MODIFICATION_ORDER"));
}
