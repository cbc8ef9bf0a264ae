//! Secret store access.
//!
//! Abstracts the two calls the pipeline needs from a secret store, fetch
//! by id and list by name filter, behind the [`SecretStore`] trait.
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Feature-gate if it pulls in an SDK
//! 4. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Vault { /* ... */ }
//!
//! impl SecretStore for Vault {
//!     fn get_secret_value(&self, secret_id: &str) -> Result<SecretValue> {
//!         // Read one secret
//!     }
//!     fn list_secrets(&self, name_filter: &str, max_results: i32) -> Result<SecretPage> {
//!         // Search by name prefix
//!     }
//! }
//! ```

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{Result, StoreError};

#[cfg(feature = "aws")]
mod aws;
mod memory;

#[cfg(feature = "aws")]
pub use aws::AwsStore;
pub use memory::MemoryStore;

static SECRET_ARN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(constants::SECRET_ARN_PATTERN).expect("secret ARN pattern is a valid regex")
});

/// Raw response to a single secret read.
#[derive(Default, Clone)]
pub struct SecretValue {
    /// The store's own name for the secret.
    pub name: Option<String>,
    /// Text payload.
    pub string: Option<Zeroizing<String>>,
    /// Binary payload, used only when there is no text payload.
    pub binary: Option<Zeroizing<Vec<u8>>>,
}

/// One page of a name-filtered listing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SecretPage {
    pub names: Vec<String>,
    /// More results exist beyond this page.
    pub has_more: bool,
}

/// A fetched secret, ready to be flattened.
#[derive(Clone)]
pub struct SecretRecord {
    /// Canonical name reported by the store.
    pub name: String,
    pub value: Zeroizing<String>,
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretValue")
            .field("name", &self.name)
            .field("string", &self.string.as_ref().map(|_| "[REDACTED]"))
            .field("binary", &self.binary.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl fmt::Debug for SecretRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretRecord")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Secret store trait.
///
/// Calls are issued one at a time; implementations never retry.
pub trait SecretStore {
    /// Read a secret by name or ARN.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound`, `StoreError::AccessDenied`, or
    /// `StoreError::Request` for any other failure.
    fn get_secret_value(&self, secret_id: &str) -> Result<SecretValue>;

    /// List secret names matching a name prefix filter.
    ///
    /// Only the first page of at most `max_results` names is returned.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the listing call fails.
    fn list_secrets(&self, name_filter: &str, max_results: i32) -> Result<SecretPage>;
}

/// Check whether `secret_id` is a Secrets Manager ARN.
pub fn is_secret_arn(secret_id: &str) -> bool {
    SECRET_ARN.is_match(secret_id)
}

/// Fetch one secret and validate the response.
///
/// # Errors
///
/// Propagates store errors. Returns `StoreError::InvalidSecret` when the
/// response has no name, no payload, or a binary payload that is not UTF-8.
pub fn fetch(store: &dyn SecretStore, secret_id: &str) -> Result<SecretRecord> {
    trace!(secret_id, "fetching secret");

    let response = store.get_secret_value(secret_id)?;

    let invalid = |reason: &str| StoreError::InvalidSecret {
        id: secret_id.to_string(),
        reason: reason.to_string(),
    };

    let name = response
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| invalid("store returned no name"))?;

    let value = match (response.string, response.binary) {
        (Some(text), _) => text,
        (None, Some(bytes)) => {
            let text = std::str::from_utf8(&bytes)
                .map_err(|_| invalid("binary value is not valid UTF-8 text"))?;
            Zeroizing::new(text.to_string())
        }
        (None, None) => return Err(invalid("store returned no value").into()),
    };

    debug!(secret_id, name = %name, value_len = value.len(), "fetched secret");
    Ok(SecretRecord { name, value })
}
