//! In-memory sink for tests.

use std::collections::BTreeMap;

use super::Sink;
use crate::error::Result;

/// Records every sink call in memory.
#[derive(Debug, Default, Clone)]
pub struct Memory {
    /// Live variables, as the next step would see them.
    pub vars: BTreeMap<String, String>,
    /// `(name, value)` pairs in emit order.
    pub emitted: Vec<(String, String)>,
    /// Values registered for masking.
    pub masked: Vec<String>,
}

impl Memory {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink pre-populated with live variables.
    pub fn with_vars(vars: &[(&str, &str)]) -> Self {
        Self {
            vars: vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    /// Emitted variable names in order.
    pub fn emitted_names(&self) -> Vec<&str> {
        self.emitted.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Live value of a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

impl Sink for Memory {
    fn mask(&mut self, value: &str) -> Result<()> {
        self.masked.push(value.to_string());
        Ok(())
    }

    fn emit(&mut self, name: &str, value: &str) -> Result<()> {
        self.emitted.push((name.to_string(), value.to_string()));
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn export(&mut self, name: &str, value: &str) -> Result<()> {
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, name: &str) -> Result<()> {
        self.vars.remove(name);
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
