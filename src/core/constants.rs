//! Constants used throughout secrets-action.
//!
//! Centralizes magic strings and configuration values.

/// Reserved variable holding the JSON list of injected names between the
/// main step and the post step. Never emitted as a secret variable.
pub const CLEANUP_NAME: &str = "SECRETS_LIST_CLEAN_UP";

/// Page size for prefix searches. A second page is always an error.
pub const LIST_SECRETS_MAX_RESULTS: i32 = 100;

/// Default network connect timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Smallest accepted network connect timeout in milliseconds.
pub const MIN_TIMEOUT_MS: u64 = 10;

/// App name reported to the secret store in the user agent.
pub const APP_NAME: &str = "github-action";

/// Prefix filters: at least 3 allowed characters followed by a single `*`.
pub const PREFIX_PATTERN: &str = r"^[a-zA-Z0-9/_+=.@-]{3,}\*$";

/// Secrets Manager ARN shape.
pub const SECRET_ARN_PATTERN: &str = r"^arn:aws:secretsmanager:.*:[0-9]{12,}:secret:.*$";
