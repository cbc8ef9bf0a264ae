//! Cleanup command.
//!
//! The post step: blank every variable the main step injected.

use crate::cli::output;
use crate::core::cleanup;
use crate::core::config::Target;
use crate::core::sink::Actions;
use crate::error::Result;

/// Remove injected variables listed in the cleanup list.
pub fn execute() -> Result<()> {
    // Cleared names are written back as empty env values.
    let mut sink = Actions::from_env(Target::Env);
    let cleared = cleanup::cleanup(&mut sink)?;

    if cleared.is_empty() {
        output::dimmed("no secrets to clean up");
    } else {
        output::success(&format!("cleaned up {} secret variable(s)", cleared.len()));
    }
    Ok(())
}
