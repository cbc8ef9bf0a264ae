//! Main-step orchestration.
//!
//! Resolve locators, fetch each secret, inject it, and persist the merged
//! cleanup list. Resolution problems abort the run; a failure on one entry
//! is recorded and the remaining entries still run.

use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use crate::core::alias::{Alias, Entry};
use crate::core::cleanup;
use crate::core::config::Settings;
use crate::core::inject::Injector;
use crate::core::resolve::resolve;
use crate::core::sink::Sink;
use crate::core::store::{self, SecretStore};
use crate::error::Result;

/// One entry that could not be fetched or injected.
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    pub secret_id: String,
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to fetch secret: '{}'. Error: {}.",
            self.secret_id, self.message
        )
    }
}

/// Outcome of a main-step run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RunReport {
    /// Names injected by this run, in order.
    pub injected: Vec<String>,
    pub failures: Vec<Failure>,
}

impl RunReport {
    /// No entry failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run the main step.
///
/// # Errors
///
/// Returns configuration, resolution, or cleanup-list errors, which abort
/// the run before anything is injected, or a sink error while persisting
/// the cleanup list. Per-entry failures are reported in the [`RunReport`].
pub fn run(store: &dyn SecretStore, sink: &mut dyn Sink, settings: &Settings) -> Result<RunReport> {
    settings.validate()?;
    let transformation = settings.transformation;

    info!("building secrets list");
    let resolved = resolve(store, &settings.secret_ids, transformation)?;
    let entries = resolved
        .iter()
        .map(|input| Entry::parse(input, transformation))
        .collect::<Result<Vec<_>>>()?;

    let prior = cleanup::load_list(sink)?;
    let mut failures = Vec::new();

    let injected = {
        let mut injector = Injector::new(sink, transformation, settings.parse_json)
            .with_json_keys(&settings.json_keys)
            .with_taken(prior.iter().cloned());

        for entry in entries {
            if let Err(err) = inject_entry(store, &mut injector, entry.clone()) {
                warn!(secret_id = %entry.locator, error = %err, "secret entry failed");
                failures.push(Failure {
                    secret_id: entry.locator,
                    message: err.to_string(),
                });
            }
        }

        injector.into_injected()
    };

    cleanup::persist(sink, &cleanup::merge(&prior, &injected))?;
    info!(
        injected = injected.len(),
        failed = failures.len(),
        "completed adding secrets"
    );

    Ok(RunReport { injected, failures })
}

fn inject_entry(
    store: &dyn SecretStore,
    injector: &mut Injector<'_>,
    entry: Entry,
) -> Result<()> {
    let record = store::fetch(store, &entry.locator)?;

    let secret_name = if store::is_secret_arn(&entry.locator) {
        record.name.as_str()
    } else {
        entry.locator.as_str()
    };

    let alias = match entry.alias {
        Alias::Blank if !injector.will_flatten(&record.value) => {
            debug!(secret = secret_name, "blank alias on a flat value, using secret name");
            Alias::None
        }
        alias => alias,
    };

    injector.inject(secret_name, &alias, &record.value)?;
    Ok(())
}
