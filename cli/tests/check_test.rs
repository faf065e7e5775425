//! Integration tests for the `check` command.

mod common;

use common::{gdvn, temp_file};
use predicates::prelude::*;

#[test]
fn check_valid_file() {
    let file = temp_file("{a:1}");

    gdvn()
        .args(["check", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn check_multiple_valid_files() {
    let file1 = temp_file("1");
    let file2 = temp_file("[a b c]");
    let file3 = temp_file("/* just a comment and */ \"a string\"");

    gdvn()
        .args([
            "check",
            file1.path().to_str().unwrap(),
            file2.path().to_str().unwrap(),
            file3.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK").count(3));
}

#[test]
fn check_reports_each_failure() {
    let good = temp_file("{a:1}");
    let bad = temp_file("{a:1 a:2}");

    gdvn()
        .args([
            "--no-color",
            "check",
            bad.path().to_str().unwrap(),
            good.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("OK").count(1))
        .stderr(predicate::str::contains("Duplicate map key: a"));
}

#[test]
fn check_empty_file() {
    let file = temp_file("");

    gdvn()
        .args(["--no-color", "check", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unexpected end of file"));
}

#[test]
fn check_missing_file() {
    gdvn()
        .args(["check", "nonexistent.gdvn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: nonexistent.gdvn"));
}

#[test]
fn check_quiet_mode() {
    let file = temp_file("[");

    gdvn()
        .args(["check", "--quiet", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn check_requires_files() {
    gdvn().arg("check").assert().failure();
}
