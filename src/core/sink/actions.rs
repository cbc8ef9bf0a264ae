//! GitHub Actions sink.
//!
//! Speaks the runner's workflow-command protocol:
//!
//! - masking: `::add-mask::<value>` on stdout
//! - environment: heredoc blocks appended to `$GITHUB_ENV`
//! - outputs: heredoc blocks appended to `$GITHUB_OUTPUT`
//!
//! When a file variable is missing (old runners, local runs) the legacy
//! `::set-env` / `::set-output` commands are printed instead. Every
//! environment write is mirrored into this process's environment so later
//! lookups see it.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::trace;

use super::Sink;
use crate::core::config::Target;
use crate::error::{Result, SinkError};

/// Sink writing to the GitHub Actions runner.
pub struct Actions {
    target: Target,
    env_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    out: Box<dyn Write>,
}

impl Actions {
    /// Sink configured from `GITHUB_ENV` / `GITHUB_OUTPUT`, printing
    /// commands to stdout.
    pub fn from_env(target: Target) -> Self {
        let file = |var: &str| {
            std::env::var_os(var)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self::new(target, file("GITHUB_ENV"), file("GITHUB_OUTPUT"))
    }

    /// Sink with explicit command files.
    pub fn new(target: Target, env_file: Option<PathBuf>, output_file: Option<PathBuf>) -> Self {
        Self {
            target,
            env_file,
            output_file,
            out: Box::new(io::stdout()),
        }
    }

    /// Send workflow commands to `out` instead of stdout.
    pub fn with_writer(mut self, out: Box<dyn Write>) -> Self {
        self.out = out;
        self
    }

    fn command(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)
            .and_then(|_| self.out.flush())
            .map_err(|source| io_error("stdout", source))?;
        Ok(())
    }

    fn set_env(&mut self, name: &str, value: &str) -> Result<()> {
        check_env_var(name, value)?;
        std::env::set_var(name, value);

        match self.env_file.clone() {
            Some(path) => append_key_value(&path, name, value),
            None => self.command(&format!(
                "::set-env name={}::{}",
                escape_property(name),
                escape_data(value)
            )),
        }
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        match self.output_file.clone() {
            Some(path) => append_key_value(&path, name, value),
            None => self.command(&format!(
                "::set-output name={}::{}",
                escape_property(name),
                escape_data(value)
            )),
        }
    }
}

impl Sink for Actions {
    fn mask(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        self.command(&format!("::add-mask::{}", escape_data(value)))
    }

    fn emit(&mut self, name: &str, value: &str) -> Result<()> {
        trace!(name, target = %self.target, "emitting variable");
        match self.target {
            Target::Env => self.set_env(name, value),
            Target::Output => self.set_output(name, value),
        }
    }

    fn export(&mut self, name: &str, value: &str) -> Result<()> {
        self.set_env(name, value)
    }

    fn clear(&mut self, name: &str) -> Result<()> {
        // set_env rejects names the process environment cannot hold.
        self.set_env(name, "")?;
        std::env::remove_var(name);
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

fn io_error(path: &str, source: io::Error) -> SinkError {
    SinkError::Io {
        path: path.to_string(),
        source,
    }
}

/// Reject names and values the process environment cannot hold.
fn check_env_var(name: &str, value: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.contains(['=', '\0', '\n', '\r']) {
        "name contains '=', NUL or a line break"
    } else if value.contains('\0') {
        "value contains a NUL byte"
    } else {
        return Ok(());
    };

    Err(SinkError::InvalidVariable {
        name: name.to_string(),
        reason,
    }
    .into())
}

/// Append a `NAME<<delimiter` heredoc block to a runner command file.
fn append_key_value(path: &Path, name: &str, value: &str) -> Result<()> {
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
    let block = format!("{name}<<{delimiter}\n{value}\n{delimiter}\n");

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_error(&path.display().to_string(), e))?;
    file.write_all(block.as_bytes())
        .map_err(|e| io_error(&path.display().to_string(), e))?;

    Ok(())
}

/// Escape a workflow command payload.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
