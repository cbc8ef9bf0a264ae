//! In-memory secret store.
//!
//! Backs tests and local dry runs. Listing behaves like the Secrets
//! Manager `name` filter: a prefix match, truncated to one page.

use std::collections::BTreeMap;
use zeroize::Zeroizing;

use super::{SecretPage, SecretStore, SecretValue};
use crate::error::{Result, StoreError};

#[derive(Clone)]
enum Payload {
    Text(Zeroizing<String>),
    Binary(Zeroizing<Vec<u8>>),
}

#[derive(Clone)]
struct Stored {
    arn: Option<String>,
    payload: Payload,
}

/// Secret store held entirely in memory.
#[derive(Clone, Default)]
pub struct MemoryStore {
    secrets: BTreeMap<String, Stored>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text secret.
    pub fn with_secret(mut self, name: &str, value: &str) -> Self {
        self.insert(name, None, Payload::Text(Zeroizing::new(value.to_string())));
        self
    }

    /// Add a text secret that can also be read by ARN.
    pub fn with_arn_secret(mut self, arn: &str, name: &str, value: &str) -> Self {
        self.insert(
            name,
            Some(arn.to_string()),
            Payload::Text(Zeroizing::new(value.to_string())),
        );
        self
    }

    /// Add a binary secret.
    pub fn with_binary_secret(mut self, name: &str, value: &[u8]) -> Self {
        self.insert(name, None, Payload::Binary(Zeroizing::new(value.to_vec())));
        self
    }

    fn insert(&mut self, name: &str, arn: Option<String>, payload: Payload) {
        self.secrets
            .insert(name.to_string(), Stored { arn, payload });
    }

    fn find(&self, secret_id: &str) -> Option<(&String, &Stored)> {
        self.secrets.get_key_value(secret_id).or_else(|| {
            self.secrets
                .iter()
                .find(|(_, s)| s.arn.as_deref() == Some(secret_id))
        })
    }
}

impl SecretStore for MemoryStore {
    fn get_secret_value(&self, secret_id: &str) -> Result<SecretValue> {
        let (name, stored) = self
            .find(secret_id)
            .ok_or_else(|| StoreError::NotFound(secret_id.to_string()))?;

        let (string, binary) = match &stored.payload {
            Payload::Text(text) => (Some(text.clone()), None),
            Payload::Binary(bytes) => (None, Some(bytes.clone())),
        };

        Ok(SecretValue {
            name: Some(name.clone()),
            string,
            binary,
        })
    }

    fn list_secrets(&self, name_filter: &str, max_results: i32) -> Result<SecretPage> {
        let page_size = usize::try_from(max_results).unwrap_or(0);
        let mut names: Vec<String> = self
            .secrets
            .keys()
            .filter(|name| name.starts_with(name_filter))
            .cloned()
            .collect();

        let has_more = names.len() > page_size;
        names.truncate(page_size);

        Ok(SecretPage { names, has_more })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_matches_prefix() {
        let store = MemoryStore::new()
            .with_secret("test/one", "1")
            .with_secret("test/two", "2")
            .with_secret("other/three", "3");

        let page = store.list_secrets("test/", 100).unwrap();
        assert_eq!(page.names, vec!["test/one", "test/two"]);
        assert!(!page.has_more);
    }

    #[test]
    fn test_list_truncates_to_one_page() {
        let mut store = MemoryStore::new();
        for i in 0..5 {
            store = store.with_secret(&format!("bulk/{i}"), "v");
        }

        let page = store.list_secrets("bulk/", 3).unwrap();
        assert_eq!(page.names.len(), 3);
        assert!(page.has_more);
    }

    #[test]
    fn test_get_by_arn() {
        let arn = "arn:aws:secretsmanager:us-east-1:123456789000:secret:x-AbCdEf";
        let store = MemoryStore::new().with_arn_secret(arn, "x", "value");
        let value = store.get_secret_value(arn).unwrap();
        assert_eq!(value.name.as_deref(), Some("x"));
        assert_eq!(value.string.as_deref().map(String::as_str), Some("value"));
    }
}
