//! Test fixtures and constants.

use secrets_action::core::config::Settings;
use secrets_action::core::store::MemoryStore;

pub const TEST_NAME_1: &str = "test/one";
pub const SECRET_1: &str = r#"{"user": "admin", "password": "adminpw"}"#;

pub const TEST_NAME_2: &str = "test/two";
pub const SECRET_2: &str = r#"{"user": "integ", "password": "integpw"}"#;

pub const TEST_NAME_3: &str = "app/secret";
pub const ENV_NAME_3: &str = "SECRET_ALIAS";
pub const SECRET_3: &str = "secretString1";

pub const TEST_ARN_1: &str = "arn:aws:secretsmanager:ap-south-1:123456789000:secret:test2-aBcdef";
pub const TEST_NAME_4: &str = "arn/secret-name";
pub const ENV_NAME_4: &str = "ARN_ALIAS";
pub const SECRET_4: &str = "secretString2";

pub const BLANK_NAME: &str = "blank/test";
pub const SECRET_FOR_BLANK: &str =
    r#"{"username": "integ", "password": "integpw", "config": {"id1": "example1"}}"#;

pub const BLANK_NAME_2: &str = "blank/two";
pub const SECRET_FOR_BLANK_2: &str = "blankNameSecretString";

pub const BLANK_NAME_3: &str = "blank/three";
pub const SECRET_FOR_BLANK_3: &str =
    r#"{"username": "integ", "password": "integpw", "config": {"id2": "example2"}}"#;

/// Store holding every fixture secret.
pub fn fixture_store() -> MemoryStore {
    MemoryStore::new()
        .with_secret(TEST_NAME_1, SECRET_1)
        .with_secret(TEST_NAME_2, SECRET_2)
        .with_secret(TEST_NAME_3, SECRET_3)
        .with_arn_secret(TEST_ARN_1, TEST_NAME_4, SECRET_4)
        .with_secret(BLANK_NAME, SECRET_FOR_BLANK)
        .with_secret(BLANK_NAME_2, SECRET_FOR_BLANK_2)
        .with_secret(BLANK_NAME_3, SECRET_FOR_BLANK_3)
}

/// Settings for the given entries with default naming.
pub fn settings(ids: &[&str], parse_json: bool) -> Settings {
    Settings {
        secret_ids: ids.iter().map(|s| s.to_string()).collect(),
        parse_json,
        ..Settings::default()
    }
}
