//! Error types.
//!
//! Each concern has its own error enum; they all convert into [`Error`]
//! so callers can use `?` across module boundaries.

use thiserror::Error;

/// Top-level error for secrets-action.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Inject(#[from] InjectError),

    #[error(transparent)]
    Cleanup(#[from] CleanupError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("{0} secret entries could not be injected")]
    Incomplete(usize),
}

/// Invalid user configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid network timeout '{value}': must be an integer of at least {min} milliseconds")]
    InvalidTimeout { value: String, min: u64 },

    #[error("invalid http proxy '{0}': expected an http:// or https:// URL")]
    InvalidProxy(String),

    #[error("no secret ids were provided")]
    NoSecretIds,
}

/// Failures while expanding the configured locators.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("The alias '{0}' is not a valid environment name. Please verify that it has uppercase letters, numbers, and underscore only.")]
    InvalidAlias(String),

    #[error("Please use a valid prefix search for '{0}' (should be at least 3 characters and end in *)")]
    InvalidPrefix(String),

    #[error("No matching secrets were returned for prefix \"{0}\".")]
    NoMatch(String),

    #[error("A unique alias was requested for prefix \"{0}\", but the search result for this prefix returned multiple results.")]
    AmbiguousAlias(String),

    #[error("A search for prefix \"{prefix}\" matched more than the maximum of {max} secrets per prefix.")]
    TooManyResults { prefix: String, max: i32 },
}

/// Secret store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("access denied to secret {id}: {message}")]
    AccessDenied { id: String, message: String },

    #[error("invalid secret {id}: {reason}")]
    InvalidSecret { id: String, reason: String },

    #[error("secret store request failed for {id}: {message}")]
    Request { id: String, message: String },

    #[error("failed to start secret store client: {0}")]
    Runtime(String),
}

/// Flattening and injection failures.
#[derive(Error, Debug)]
pub enum InjectError {
    #[error("The environment name '{0}' is already in use. Please use an alias to ensure that each secret has a unique environment name")]
    DuplicateVariable(String),

    #[error("Secret '{0}' produced an empty variable name. JSON keys must not be empty when the alias is blank")]
    EmptyName(String),
}

/// Post-job cleanup failures.
#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("cleanup list is not a JSON array of names: {0}")]
    InvalidCleanupList(#[source] serde_json::Error),

    #[error("Failed to clean secret from environment: {0}.")]
    NotCleared(String),
}

/// Failures writing to the CI platform.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize cleanup list: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot set environment variable '{name}': {reason}")]
    InvalidVariable { name: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
