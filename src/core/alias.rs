//! Alias extraction from `[alias,]locator` config entries.

use std::fmt;

use crate::core::naming::NameTransformation;
use crate::error::{ResolveError, Result};

/// Alias attached to a config entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alias {
    /// No comma in the entry: the secret name is used.
    None,
    /// Entry started with a comma (`,my/secret`). JSON keys are injected
    /// without any prefix.
    Blank,
    /// User-chosen variable base name.
    Named(String),
}

impl Alias {
    /// Whether a non-empty alias was given.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

/// A config entry split into its alias and secret locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub alias: Alias,
    pub locator: String,
}

impl Entry {
    /// Split `input` on its first comma and validate the alias.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::InvalidAlias` when a non-empty alias differs
    /// from its own sanitized form.
    pub fn parse(input: &str, transformation: NameTransformation) -> Result<Self> {
        let Some((alias, locator)) = input.split_once(',') else {
            return Ok(Self {
                alias: Alias::None,
                locator: input.trim().to_string(),
            });
        };

        let alias = alias.trim();
        let locator = locator.trim().to_string();

        if alias.is_empty() {
            return Ok(Self {
                alias: Alias::Blank,
                locator,
            });
        }

        if transformation.sanitize(alias) != alias {
            return Err(ResolveError::InvalidAlias(alias.to_string()).into());
        }

        Ok(Self {
            alias: Alias::Named(alias.to_string()),
            locator,
        })
    }

    /// Same entry pointing at another locator.
    pub fn with_locator(&self, locator: &str) -> Self {
        Self {
            alias: self.alias.clone(),
            locator: locator.to_string(),
        }
    }
}

impl fmt::Display for Entry {
    /// Formats back into config syntax: `alias,locator`, `,locator` or `locator`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Alias::None => write!(f, "{}", self.locator),
            Alias::Blank => write!(f, ",{}", self.locator),
            Alias::Named(alias) => write!(f, "{},{}", alias, self.locator),
        }
    }
}
