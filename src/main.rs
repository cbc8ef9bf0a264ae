//! secrets-action - Load AWS Secrets Manager secrets into GitHub Actions jobs.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secrets_action::cli::output;
use secrets_action::cli::{execute, Cli};
use secrets_action::error::{ConfigError, Error, ResolveError};

fn main() {
    let cli = Cli::parse();

    // Step debug logging turns ours on too.
    let runner_debug = std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1");
    let filter = EnvFilter::try_from_env("SECRETS_ACTION_LOG").unwrap_or_else(|_| {
        if cli.verbose || runner_debug {
            EnvFilter::new("secrets_action=debug")
        } else {
            EnvFilter::new("secrets_action=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Config(ConfigError::NoSecretIds) => {
                Some("pass --secret-ids or set the secret-ids input")
            }
            Error::Resolve(ResolveError::AmbiguousAlias(_)) => {
                Some("remove the alias or narrow the prefix to a single secret")
            }
            Error::Resolve(ResolveError::TooManyResults { .. }) => {
                Some("use a longer prefix so it matches fewer secrets")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
