//! Command-line interface.

pub mod cleanup;
pub mod output;
pub mod run;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::core::config::{parse_bool, Target};
use crate::core::naming::NameTransformation;
use crate::error::Result;

/// secrets-action - Load AWS Secrets Manager secrets into GitHub Actions jobs.
#[derive(Parser)]
#[command(
    name = "secrets-action",
    about = "Load AWS Secrets Manager secrets into GitHub Actions jobs",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Fetch secrets and inject them as masked variables (main step)
    Run(RunArgs),

    /// Remove every variable injected by earlier runs (post step)
    Cleanup,
}

/// Inputs for the main step.
///
/// Each flag falls back to the matching `INPUT_*` variable so the binary can
/// run directly from an action definition.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Secret names, ARNs, or prefixes ending in `*`, optionally `ALIAS,`-prefixed
    #[arg(long = "secret-ids", env = "INPUT_SECRET-IDS", num_args = 1..)]
    pub secret_ids: Vec<String>,

    /// Expand JSON object secrets into one variable per key
    #[arg(
        long = "parse-json-secrets",
        env = "INPUT_PARSE-JSON-SECRETS",
        value_parser = parse_bool,
        action = ArgAction::Set,
        default_value = "false",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub parse_json_secrets: bool,

    /// Only inject these JSON keys (dotted or underscored paths)
    #[arg(long = "json-secret-keys", env = "INPUT_JSON-SECRET-KEYS", num_args = 1..)]
    pub json_secret_keys: Vec<String>,

    /// Variable name casing: uppercase, lowercase, or none
    #[arg(
        long = "name-transformation",
        env = "INPUT_NAME-TRANSFORMATION",
        default_value = "uppercase"
    )]
    pub name_transformation: NameTransformation,

    /// Connect timeout in milliseconds
    #[arg(long = "network-timeout", env = "INPUT_AUTO-SELECT-FAMILY-ATTEMPT-TIMEOUT")]
    pub network_timeout: Option<String>,

    /// Proxy URL for store requests
    #[arg(long = "http-proxy", env = "INPUT_HTTP-PROXY")]
    pub http_proxy: Option<String>,

    /// Where to write secrets: env or output
    #[arg(long, env = "INPUT_TARGET", default_value = "env")]
    pub target: Target,

    /// AWS region override
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Secrets Manager endpoint override
    #[arg(long = "endpoint-url", env = "SECRETS_ACTION_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Print a JSON summary of the run
    #[arg(long)]
    pub json: bool,
}

/// Execute a CLI command.
pub fn execute(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run::execute(args),
        Command::Cleanup => cleanup::execute(),
    }
}
