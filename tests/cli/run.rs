//! Tests for `secrets-action run` paths that fail before any store request.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_run_without_secret_ids_fails() {
    let t = Test::new();

    let output = t.run(&[]);

    assert_failure(&output);
    assert_stderr_contains(&output, "no secret ids were provided");
    assert_stderr_contains(&output, "secret-ids");
}

#[test]
fn test_run_rejects_short_timeout() {
    let t = Test::new();

    let output = t.run(&["--secret-ids", "app/secret", "--network-timeout", "9"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "invalid network timeout '9'");
    assert!(t.env_contents().is_empty());
}

#[test]
fn test_run_rejects_non_numeric_timeout() {
    let t = Test::new();

    let output = t.run(&["--secret-ids", "app/secret", "--network-timeout", "abc"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "invalid network timeout 'abc'");
}

#[test]
fn test_run_rejects_invalid_proxy() {
    let t = Test::new();

    let output = t.run(&["--secret-ids", "app/secret", "--http-proxy", "ftp://proxy:21"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "invalid http proxy 'ftp://proxy:21'");
}

#[test]
fn test_run_rejects_invalid_prefix() {
    let t = Test::new();

    let output = t.run(&["--secret-ids", "ab*"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "Please use a valid prefix search for 'ab*'");
    assert!(t.env_contents().is_empty());
}

#[test]
fn test_run_rejects_invalid_alias() {
    let t = Test::new();

    let output = t.run(&["--secret-ids", "bad-alias,app/secret"]);

    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "The alias 'bad-alias' is not a valid environment name",
    );
    assert!(t.env_contents().is_empty());
}

#[test]
fn test_run_reads_action_inputs() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("INPUT_SECRET-IDS", "app/secret\nab*\n")
        .arg("run")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "Please use a valid prefix search for 'ab*'");
}

#[test]
fn test_run_rejects_non_boolean_parse_json() {
    let t = Test::new();

    t.cmd()
        .env("INPUT_PARSE-JSON-SECRETS", "yes")
        .args(["run", "--secret-ids", "app/secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a boolean"));
}

#[test]
fn test_run_rejects_unknown_name_transformation() {
    let t = Test::new();

    let output = t.run(&["--secret-ids", "app/secret", "--name-transformation", "title"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "title");
}
