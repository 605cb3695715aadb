//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn quotext() -> Command {
    Command::cargo_bin("quotext").unwrap()
}

#[test]
fn help_lists_subcommands() {
    quotext()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn process_missing_file_fails() {
    quotext()
        .args(["process", "does-not-exist.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_with_no_matches_fails() {
    let dir = tempfile::tempdir().unwrap();
    quotext()
        .current_dir(dir.path())
        .args(["batch", "*.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching PDF files"));
}

#[test]
fn config_init_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    quotext()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("quotext.json").exists());

    // Second init without --force refuses to clobber.
    quotext()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_set_then_show_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    quotext()
        .current_dir(dir.path())
        .args(["config", "set", "brand", "Cadre Wire Group"])
        .assert()
        .success();

    quotext()
        .current_dir(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cadre Wire Group"));
}
