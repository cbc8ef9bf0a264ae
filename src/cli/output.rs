//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: variable names
//! - Dimmed: secondary info
//!
//! Inside a GitHub Actions job, errors and warnings are printed as workflow
//! annotations so they show up on the run summary.

use console::style;
use std::fmt::Display;

use crate::core::sink::escape_data;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Check if we are running as a GitHub Actions step.
pub fn in_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ injected 4 secrets`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message.
///
/// `::error::` annotation on stdout inside Actions, red `✗` on stderr
/// otherwise.
pub fn error(msg: &str) {
    if in_actions() {
        println!("::error::{}", escape_data(msg));
    } else if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if in_actions() {
        println!("::warning::{}", escape_data(msg));
    } else if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ use a longer prefix`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a key-value pair (label dimmed).
///
/// Example: `  target:  env`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a list item with bullet.
///
/// Example: `  • DATABASE_URL`
pub fn list_item(item: &str) {
    if colors_enabled() {
        println!("  • {}", style(item).cyan());
    } else {
        println!("  • {}", item);
    }
}

/// Print a dimmed/secondary message.
///
/// Example: `no cleanup list found`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}
