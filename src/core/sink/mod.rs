//! Variable sinks.
//!
//! A sink is where injected variables end up: the GitHub Actions runner in
//! production, or an in-memory map in tests.

use crate::error::Result;

mod actions;
mod memory;

pub use actions::{escape_data, Actions};
pub use memory::Memory;

/// Destination for injected variables.
pub trait Sink {
    /// Register a value for redaction from all later log output.
    fn mask(&mut self, value: &str) -> Result<()>;

    /// Write a secret variable to the configured target (env or output).
    fn emit(&mut self, name: &str, value: &str) -> Result<()>;

    /// Write a plain environment variable, whatever the target.
    fn export(&mut self, name: &str, value: &str) -> Result<()>;

    /// Overwrite a variable with an empty value and remove it from the live
    /// environment.
    fn clear(&mut self, name: &str) -> Result<()>;

    /// Current live value of a variable.
    fn lookup(&self, name: &str) -> Option<String>;
}
