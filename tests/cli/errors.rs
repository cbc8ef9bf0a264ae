//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run").and(predicate::str::contains("cleanup")));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown-command"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("secrets-action"));
}

#[test]
fn test_verbose_flag_accepted() {
    let t = Test::new();

    t.cmd().args(["--verbose", "cleanup"]).assert().success();
}

#[test]
fn test_errors_are_annotations_in_actions() {
    let t = Test::new();

    t.cmd()
        .env("GITHUB_ACTIONS", "true")
        .args(["run", "--network-timeout", "9"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("::error::invalid network timeout '9'"))
        .stderr(predicate::str::contains("✗").not());
}

#[test]
fn test_errors_are_styled_outside_actions() {
    let t = Test::new();

    let output = t.run(&["--network-timeout", "9"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "✗ invalid network timeout '9'");
}
