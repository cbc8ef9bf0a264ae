//! Secret injection.
//!
//! Turns one fetched secret into one or more masked variables. With JSON
//! parsing on, an object secret is flattened recursively: every leaf
//! becomes `PREFIX_KEY_SUBKEY`, in the object's own key order.

use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::HashSet;
use tracing::debug;

use crate::core::alias::Alias;
use crate::core::constants;
use crate::core::naming::NameTransformation;
use crate::core::sink::Sink;
use crate::error::{InjectError, Result};

/// Check whether `text` is a JSON object (not an array, scalar or null).
pub fn is_json_object(text: &str) -> bool {
    parse_object(text).is_some()
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Injects secrets into a sink, keeping every emitted name unique.
///
/// A name is taken if this run emitted it, it is the reserved cleanup list
/// name, it was passed to [`Injector::with_taken`], or the sink already
/// holds a non-empty value for it.
pub struct Injector<'a> {
    sink: &'a mut dyn Sink,
    transformation: NameTransformation,
    parse_json: bool,
    /// Sanitized key paths to keep; empty keeps everything.
    json_keys: Vec<String>,
    taken: HashSet<String>,
    injected: Vec<String>,
}

impl<'a> Injector<'a> {
    pub fn new(sink: &'a mut dyn Sink, transformation: NameTransformation, parse_json: bool) -> Self {
        let mut taken = HashSet::new();
        taken.insert(constants::CLEANUP_NAME.to_string());

        Self {
            sink,
            transformation,
            parse_json,
            json_keys: Vec::new(),
            taken,
            injected: Vec::new(),
        }
    }

    /// Only emit JSON leaves whose key path (or an ancestor's) is listed.
    ///
    /// `database.password` and `database_password` both select
    /// `{"database": {"password": ...}}`.
    pub fn with_json_keys(mut self, keys: &[String]) -> Self {
        self.json_keys = keys
            .iter()
            .map(|k| self.transformation.sanitize(k.trim()))
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    /// Treat `names` as already in use, e.g. from an earlier step's cleanup list.
    pub fn with_taken<I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.taken.extend(names);
        self
    }

    /// Whether `value` will be expanded into several variables.
    pub fn will_flatten(&self, value: &str) -> bool {
        self.parse_json && is_json_object(value)
    }

    /// Every name injected so far, in order.
    pub fn injected(&self) -> &[String] {
        &self.injected
    }

    /// Consume the injector and return every injected name.
    pub fn into_injected(self) -> Vec<String> {
        self.injected
    }

    /// Inject one secret and return the names emitted for it.
    ///
    /// Names emitted before a failure stay recorded in [`Self::injected`].
    ///
    /// # Errors
    ///
    /// Returns `InjectError::DuplicateVariable` if a name is already in use,
    /// `InjectError::EmptyName` for an empty key under a blank alias, or a
    /// sink error if writing fails.
    pub fn inject(&mut self, secret_name: &str, alias: &Alias, value: &str) -> Result<Vec<String>> {
        let t = self.transformation;

        if self.parse_json {
            if let Some(map) = parse_object(value) {
                let prefix = match alias {
                    Alias::Named(alias) => t.sanitize(alias),
                    Alias::Blank => String::new(),
                    Alias::None => t.sanitize(secret_name),
                };
                let mut names = Vec::new();
                self.flatten(secret_name, &map, &prefix, &mut Vec::new(), &mut names)?;
                return Ok(names);
            }
        }

        let name = match alias {
            Alias::Named(alias) => t.sanitize(alias),
            Alias::Blank | Alias::None => t.sanitize(secret_name),
        };
        self.emit(secret_name, name, value).map(|name| vec![name])
    }

    fn flatten(
        &mut self,
        secret_name: &str,
        map: &Map<String, Value>,
        prefix: &str,
        path: &mut Vec<String>,
        names: &mut Vec<String>,
    ) -> Result<()> {
        for (key, child) in map {
            let key_name = self.transformation.sanitize(key);
            let full = if prefix.is_empty() {
                key_name.clone()
            } else {
                format!("{}_{}", prefix, key_name)
            };
            path.push(key_name);

            let nested = match child {
                Value::Object(inner) => Some(Cow::Borrowed(inner)),
                // String leaves holding a JSON object are expanded too.
                Value::String(text) => parse_object(text).map(Cow::Owned),
                _ => None,
            };

            match nested {
                Some(inner) => self.flatten(secret_name, &inner, &full, path, names)?,
                None if self.selected(path) => {
                    let text = match child {
                        Value::String(text) => text.clone(),
                        other => other.to_string(),
                    };
                    names.push(self.emit(secret_name, full, &text)?);
                }
                None => debug!(key = %full, "skipping JSON key not in the key filter"),
            }

            path.pop();
        }

        Ok(())
    }

    fn selected(&self, path: &[String]) -> bool {
        if self.json_keys.is_empty() {
            return true;
        }
        (1..=path.len()).any(|depth| {
            let joined = path[..depth].join("_");
            self.json_keys.iter().any(|k| *k == joined)
        })
    }

    fn emit(&mut self, secret_name: &str, name: String, value: &str) -> Result<String> {
        if name.is_empty() {
            return Err(InjectError::EmptyName(secret_name.to_string()).into());
        }
        // Variables already set in the job are never overwritten.
        let live = self.sink.lookup(&name).is_some_and(|v| !v.is_empty());
        if live || self.taken.contains(&name) {
            return Err(InjectError::DuplicateVariable(name).into());
        }

        self.sink.mask(value)?;
        debug!(secret = secret_name, variable = %name, "injecting secret");
        self.sink.emit(&name, value)?;

        self.taken.insert(name.clone());
        self.injected.push(name.clone());
        Ok(name)
    }
}
