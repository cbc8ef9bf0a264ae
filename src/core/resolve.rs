//! Locator resolution.
//!
//! Expands prefix wildcards (`test/*`) into concrete secret names via the
//! store's list call, re-attaching any alias, and collapses duplicates.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use crate::core::alias::Entry;
use crate::core::constants;
use crate::core::naming::NameTransformation;
use crate::core::store::SecretStore;
use crate::error::{ResolveError, Result};

static VALID_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(constants::PREFIX_PATTERN).expect("prefix pattern is a valid regex")
});

/// Expand config entries into concrete `[alias,]secret_id` entries.
///
/// Entries without `*` pass through unchanged. Output keeps first-seen
/// order with exact duplicates removed.
///
/// # Errors
///
/// Any failure is fatal for the whole run: `InvalidAlias`, `InvalidPrefix`,
/// `NoMatch`, `AmbiguousAlias`, `TooManyResults`, or a store error.
pub fn resolve(
    store: &dyn SecretStore,
    entries: &[String],
    transformation: NameTransformation,
) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();

    for input in entries {
        if !input.contains('*') {
            if seen.insert(input.clone()) {
                resolved.push(input.clone());
            }
            continue;
        }

        let entry = Entry::parse(input, transformation)?;
        for name in expand_prefix(store, &entry)? {
            // A blank alias is dropped here; matches keep their own names.
            let concrete = if entry.alias.is_named() {
                entry.with_locator(&name).to_string()
            } else {
                name
            };
            if seen.insert(concrete.clone()) {
                resolved.push(concrete);
            }
        }
    }

    debug!(requested = entries.len(), resolved = resolved.len(), "built secrets list");
    Ok(resolved)
}

/// Run one prefix search for a wildcard entry.
fn expand_prefix(store: &dyn SecretStore, entry: &Entry) -> Result<Vec<String>> {
    let pattern = entry.locator.as_str();
    if !VALID_PREFIX.is_match(pattern) {
        return Err(ResolveError::InvalidPrefix(pattern.to_string()).into());
    }

    let prefix = pattern.trim_end_matches('*');
    let page = store.list_secrets(prefix, constants::LIST_SECRETS_MAX_RESULTS)?;
    debug!(prefix, matches = page.names.len(), has_more = page.has_more, "prefix search");

    if page.names.is_empty() {
        return Err(ResolveError::NoMatch(pattern.to_string()).into());
    }
    if entry.alias.is_named() && page.names.len() > 1 {
        return Err(ResolveError::AmbiguousAlias(pattern.to_string()).into());
    }
    if page.has_more {
        return Err(ResolveError::TooManyResults {
            prefix: pattern.to_string(),
            max: constants::LIST_SECRETS_MAX_RESULTS,
        }
        .into());
    }

    Ok(page.names)
}
