//! Test support utilities for secrets-action integration tests.
//!
//! Provides an isolated runner environment and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Fake runner environment with its own `$GITHUB_ENV` and `$GITHUB_OUTPUT`.
///
/// Child processes start from a cleared environment, so tests never see
/// the real job's `INPUT_*` or `GITHUB_*` variables and can run in
/// parallel.
pub struct Test {
    /// Temporary directory holding the runner command files
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Path used as `$GITHUB_ENV`.
    pub fn env_file(&self) -> PathBuf {
        self.dir.path().join("github_env")
    }

    /// Path used as `$GITHUB_OUTPUT`.
    pub fn output_file(&self) -> PathBuf {
        self.dir.path().join("github_output")
    }

    /// Contents of `$GITHUB_ENV`, empty if nothing was written.
    pub fn env_contents(&self) -> String {
        std::fs::read_to_string(self.env_file()).unwrap_or_default()
    }
}
