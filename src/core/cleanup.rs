//! Cleanup list tracking and post-job cleanup.
//!
//! The main step records every injected name in `SECRETS_LIST_CLEAN_UP`
//! as a JSON array. The post step reads it back, blanks each variable and
//! then the list itself.

use tracing::{debug, info};

use crate::core::constants::CLEANUP_NAME;
use crate::core::sink::Sink;
use crate::error::{CleanupError, Result, SinkError};

/// Read the cleanup list left by earlier runs.
///
/// An absent or empty variable is an empty list.
///
/// # Errors
///
/// Returns `CleanupError::InvalidCleanupList` if the value is not a JSON
/// array of strings.
pub fn load_list(sink: &dyn Sink) -> Result<Vec<String>> {
    match sink.lookup(CLEANUP_NAME) {
        Some(raw) if !raw.trim().is_empty() => {
            let names: Vec<String> =
                serde_json::from_str(&raw).map_err(CleanupError::InvalidCleanupList)?;
            Ok(names)
        }
        _ => Ok(Vec::new()),
    }
}

/// Prior entries followed by new ones, both in order.
pub fn merge(prior: &[String], new: &[String]) -> Vec<String> {
    prior.iter().chain(new).cloned().collect()
}

/// Write the cleanup list as a JSON array environment variable.
///
/// # Errors
///
/// Returns a sink error if serialization or writing fails.
pub fn persist(sink: &mut dyn Sink, names: &[String]) -> Result<()> {
    let json = serde_json::to_string(names).map_err(SinkError::Serialize)?;
    sink.export(CLEANUP_NAME, &json)
}

/// Blank every tracked variable, then the list itself.
///
/// Returns the names that were cleared, list excluded.
///
/// # Errors
///
/// Returns `CleanupError::InvalidCleanupList` for an unreadable list, or
/// `CleanupError::NotCleared` if a variable still has a value afterwards.
pub fn cleanup(sink: &mut dyn Sink) -> Result<Vec<String>> {
    let present = matches!(sink.lookup(CLEANUP_NAME), Some(raw) if !raw.trim().is_empty());
    if !present {
        debug!("no cleanup list found");
        return Ok(Vec::new());
    }

    let names = load_list(sink)?;
    for name in &names {
        clear_one(sink, name)?;
    }
    clear_one(sink, CLEANUP_NAME)?;

    info!(count = names.len(), "cleaned up secrets");
    Ok(names)
}

fn clear_one(sink: &mut dyn Sink, name: &str) -> Result<()> {
    sink.clear(name)?;
    if sink.lookup(name).is_some() {
        return Err(CleanupError::NotCleared(name.to_string()).into());
    }
    debug!(name, "cleaned from environment");
    Ok(())
}
