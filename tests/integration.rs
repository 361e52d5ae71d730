// Integration tests for the ecoscore CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify exit codes
// and stdout/stderr output. End-to-end scoring flows live in score_flow.rs.

use assert_cmd::Command;
use predicates::prelude::*;

fn ecoscore() -> Command {
    Command::cargo_bin("ecoscore").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    ecoscore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ecoscore"));
}

#[test]
fn cli_help_flag() {
    ecoscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("maturity scoring"));
}

#[test]
fn score_requires_input() {
    ecoscore()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn recommend_requires_input() {
    ecoscore()
        .arg("recommend")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_rejects_missing_assessment_file() {
    ecoscore()
        .args(["score", "/tmp/does-not-exist.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("assessment file not found"));
}

#[test]
fn dimensions_lists_the_fixed_catalog() {
    ecoscore()
        .arg("dimensions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabling Environment"))
        .stdout(predicate::str::contains("Ecosystem Infrastructure"))
        .stdout(predicate::str::contains("Finance Providers"))
        .stdout(predicate::str::contains("Finance Seekers"))
        .stdout(predicate::str::contains("MRV systems"));
}
