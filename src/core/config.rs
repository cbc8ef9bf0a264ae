//! Run settings.
//!
//! Collects everything a run needs from the user: which secrets to fetch,
//! how to name them, and how to reach the store. The CLI fills this in from
//! flags and `INPUT_*` variables; validation lives here.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::core::constants;
use crate::core::naming::NameTransformation;
use crate::error::{ConfigError, Result};

/// Where secret variables are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    /// Job environment variables (`$GITHUB_ENV`).
    #[default]
    Env,
    /// Step outputs (`$GITHUB_OUTPUT`).
    Output,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Env => "env",
            Self::Output => "output",
        })
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "env" => Ok(Self::Env),
            "output" | "outputs" => Ok(Self::Output),
            other => Err(format!("unknown target '{}' (expected env or output)", other)),
        }
    }
}

/// Settings for one main-step run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Raw `[alias,]locator` entries, de-duplicated in first-seen order.
    pub secret_ids: Vec<String>,
    /// Expand JSON object secrets into one variable per leaf.
    pub parse_json: bool,
    /// Optional key filter for JSON expansion. Empty means every key.
    pub json_keys: Vec<String>,
    pub transformation: NameTransformation,
    pub target: Target,
    /// Store connect timeout in milliseconds.
    pub timeout_ms: u64,
    pub http_proxy: Option<String>,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

fn default_timeout() -> u64 {
    constants::DEFAULT_TIMEOUT_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            secret_ids: Vec::new(),
            parse_json: false,
            json_keys: Vec::new(),
            transformation: NameTransformation::default(),
            target: Target::default(),
            timeout_ms: default_timeout(),
            http_proxy: None,
            region: None,
            endpoint_url: None,
        }
    }
}

impl Settings {
    /// Build settings from raw multi-line inputs.
    ///
    /// Locators and JSON keys are split into lines, trimmed, and
    /// de-duplicated. The timeout and proxy are validated.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an invalid timeout or proxy, or when no
    /// secret ids remain.
    pub fn from_inputs(
        secret_ids: &[String],
        json_keys: &[String],
        timeout: Option<&str>,
        http_proxy: Option<&str>,
    ) -> Result<Self> {
        let settings = Self {
            secret_ids: split_lines(secret_ids),
            json_keys: split_lines(json_keys),
            timeout_ms: parse_timeout(timeout)?,
            http_proxy: parse_proxy(http_proxy)?,
            ..Self::default()
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoSecretIds` if there is nothing to fetch, or
    /// `ConfigError::InvalidTimeout` for a timeout below the minimum.
    pub fn validate(&self) -> Result<()> {
        debug!(
            secret_ids = self.secret_ids.len(),
            parse_json = self.parse_json,
            transformation = %self.transformation,
            target = %self.target,
            "validating settings"
        );

        if self.secret_ids.is_empty() {
            return Err(ConfigError::NoSecretIds.into());
        }

        if self.timeout_ms < constants::MIN_TIMEOUT_MS {
            return Err(ConfigError::InvalidTimeout {
                value: self.timeout_ms.to_string(),
                min: constants::MIN_TIMEOUT_MS,
            }
            .into());
        }

        Ok(())
    }
}

/// Split multi-line inputs into trimmed, non-empty, unique lines.
pub fn split_lines(inputs: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    inputs
        .iter()
        .flat_map(|input| input.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(line.to_string()))
        .map(str::to_string)
        .collect()
}

/// Parse the network timeout in milliseconds.
///
/// An absent or blank value gives the default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidTimeout` for non-integers and values below
/// the minimum.
pub fn parse_timeout(raw: Option<&str>) -> Result<u64> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(constants::DEFAULT_TIMEOUT_MS),
        Some(raw) => raw,
    };

    let invalid = || ConfigError::InvalidTimeout {
        value: raw.to_string(),
        min: constants::MIN_TIMEOUT_MS,
    };

    let ms: u64 = raw.parse().map_err(|_| invalid())?;
    if ms < constants::MIN_TIMEOUT_MS {
        return Err(invalid().into());
    }

    Ok(ms)
}

/// Parse an optional proxy URL.
///
/// # Errors
///
/// Returns `ConfigError::InvalidProxy` unless the value is an `http://` or
/// `https://` URL with a host.
pub fn parse_proxy(raw: Option<&str>) -> Result<Option<String>> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    let rest = raw
        .strip_prefix("http://")
        .or_else(|| raw.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::InvalidProxy(raw.to_string()))?;

    if rest.is_empty() || rest.starts_with('/') || rest.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidProxy(raw.to_string()).into());
    }

    Ok(Some(raw.to_string()))
}

/// Parse a GitHub Actions style boolean (`true`, `True`, `TRUE`, and the
/// same for `false`).
pub fn parse_bool(raw: &str) -> std::result::Result<bool, String> {
    match raw.trim() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" | "" => Ok(false),
        other => Err(format!(
            "'{}' is not a boolean (use true, True, TRUE, false, False or FALSE)",
            other
        )),
    }
}
