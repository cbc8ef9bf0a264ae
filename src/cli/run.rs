//! Run command.
//!
//! The main step: fetch secrets from Secrets Manager and inject them into
//! the job.

use tracing::debug;

use crate::cli::output;
use crate::cli::RunArgs;
use crate::core::config::Settings;
use crate::core::pipeline::RunReport;
use crate::error::{Error, Result, SinkError};

/// Build settings from CLI arguments.
pub fn settings(args: &RunArgs) -> Result<Settings> {
    let mut settings = Settings::from_inputs(
        &args.secret_ids,
        &args.json_secret_keys,
        args.network_timeout.as_deref(),
        args.http_proxy.as_deref(),
    )?;

    settings.parse_json = args.parse_json_secrets;
    settings.transformation = args.name_transformation;
    settings.target = args.target;
    settings.region = args.region.clone().filter(|r| !r.is_empty());
    settings.endpoint_url = args.endpoint_url.clone().filter(|u| !u.is_empty());

    Ok(settings)
}

/// Fetch and inject every configured secret.
pub fn execute(args: RunArgs) -> Result<()> {
    let settings = settings(&args)?;
    debug!(?settings, "run settings");

    if !settings.json_keys.is_empty() && !settings.parse_json {
        output::warn("json-secret-keys has no effect unless parse-json-secrets is true");
    }

    let report = run_with_store(&settings)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(SinkError::Serialize)?;
        println!("{}", json);
    } else {
        print_summary(&settings, &report);
    }

    if report.is_success() {
        Ok(())
    } else {
        for failure in &report.failures {
            output::error(&failure.to_string());
        }
        Err(Error::Incomplete(report.failures.len()))
    }
}

#[cfg(feature = "aws")]
fn run_with_store(settings: &Settings) -> Result<RunReport> {
    use crate::core::{pipeline, sink::Actions, store::AwsStore};

    let store = AwsStore::connect(settings)?;
    let mut sink = Actions::from_env(settings.target);
    pipeline::run(&store, &mut sink, settings)
}

#[cfg(not(feature = "aws"))]
fn run_with_store(_settings: &Settings) -> Result<RunReport> {
    Err(crate::error::StoreError::Runtime(
        "secrets-action was built without the aws feature".to_string(),
    )
    .into())
}

fn print_summary(settings: &Settings, report: &RunReport) {
    if report.injected.is_empty() {
        output::dimmed("no secrets injected");
        return;
    }

    output::success(&format!("injected {} secret variable(s)", report.injected.len()));
    output::kv("target", settings.target);
    output::kv("names", settings.transformation);
    for name in &report.injected {
        output::list_item(name);
    }
}
