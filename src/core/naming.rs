//! Variable name sanitization.
//!
//! Turns arbitrary secret names, aliases and JSON keys into valid
//! environment variable identifiers.

use std::fmt;
use std::str::FromStr;

/// Case applied to sanitized names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameTransformation {
    /// `prod/db` -> `PROD_DB`
    #[default]
    Uppercase,
    /// `prod/db` -> `prod_db`
    Lowercase,
    /// `Prod/Db` -> `Prod_Db`
    None,
}

impl NameTransformation {
    /// Sanitize `name` into a valid variable identifier.
    ///
    /// A leading digit gets a `_` prefix, every character outside
    /// `[A-Za-z0-9_]` becomes `_`, then the case transformation applies.
    pub fn sanitize(self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 1);

        if name.starts_with(|c: char| c.is_ascii_digit()) {
            out.push('_');
        }

        for ch in name.chars() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                out.push(ch);
            } else {
                out.push('_');
            }
        }

        match self {
            Self::Uppercase => out.make_ascii_uppercase(),
            Self::Lowercase => out.make_ascii_lowercase(),
            Self::None => {}
        }

        out
    }
}

impl fmt::Display for NameTransformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::None => "none",
        };
        f.write_str(s)
    }
}

impl FromStr for NameTransformation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "uppercase" => Ok(Self::Uppercase),
            "lowercase" => Ok(Self::Lowercase),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown name transformation '{}' (expected uppercase, lowercase or none)",
                other
            )),
        }
    }
}

/// Sanitize with the default uppercase transformation.
pub fn sanitize(name: &str) -> String {
    NameTransformation::Uppercase.sanitize(name)
}
