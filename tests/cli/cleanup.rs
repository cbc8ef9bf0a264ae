//! Tests for `secrets-action cleanup`.

use crate::support::*;

const LIST: &str = "SECRETS_LIST_CLEAN_UP";

#[test]
fn test_cleanup_without_list_is_noop() {
    let t = Test::new();

    let output = t.cleanup(&[]);

    assert_success(&output);
    assert_stdout_contains(&output, "no secrets to clean up");
    assert!(t.env_contents().is_empty());
}

#[test]
fn test_cleanup_blanks_listed_variables() {
    let t = Test::new();

    let output = t.cleanup(&[
        ("TEST_ONE", "1"),
        ("TEST_TWO", "2"),
        (LIST, r#"["TEST_ONE","TEST_TWO"]"#),
    ]);

    assert_success(&output);
    assert_stdout_contains(&output, "cleaned up 2 secret variable(s)");
    assert_eq!(
        command_file_entries(&t.env_contents()),
        vec![
            ("TEST_ONE".to_string(), String::new()),
            ("TEST_TWO".to_string(), String::new()),
            (LIST.to_string(), String::new()),
        ]
    );
}

#[test]
fn test_cleanup_falls_back_to_set_env() {
    let t = Test::new();

    let output = t
        .cmd()
        .env_remove("GITHUB_ENV")
        .env("TEST_ONE", "1")
        .env(LIST, r#"["TEST_ONE"]"#)
        .arg("cleanup")
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "::set-env name=TEST_ONE::\n");
    assert_stdout_contains(&output, "::set-env name=SECRETS_LIST_CLEAN_UP::\n");
}

#[test]
fn test_cleanup_rejects_invalid_list() {
    let t = Test::new();

    let output = t.cleanup(&[(LIST, "not json")]);

    assert_failure(&output);
    assert_stderr_contains(&output, "cleanup list is not a JSON array");
}

#[test]
fn test_cleanup_error_annotation_in_actions() {
    let t = Test::new();

    let output = t.cleanup(&[("GITHUB_ACTIONS", "true"), (LIST, "{")]);

    assert_failure(&output);
    assert_stdout_contains(&output, "::error::cleanup list is not a JSON array");
}
