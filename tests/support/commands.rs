//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a secrets-action command inside the fake runner.
    ///
    /// Returns a Command configured with:
    /// - an empty environment apart from the runner command files
    /// - `NO_COLOR` so output is plain text
    /// - a fixed region and metadata lookups disabled, so the store client
    ///   can be built without network access
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("secrets-action").expect("failed to find secrets-action binary");
        cmd.env_clear();
        cmd.env("NO_COLOR", "1");
        cmd.env("GITHUB_ENV", self.env_file());
        cmd.env("GITHUB_OUTPUT", self.output_file());
        cmd.env("AWS_REGION", "us-east-1");
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `secrets-action run` with extra arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("run")
            .args(args)
            .output()
            .expect("failed to run secrets-action run")
    }

    /// Shortcut for `secrets-action cleanup` with extra variables set.
    pub fn cleanup(&self, vars: &[(&str, &str)]) -> Output {
        let mut cmd = self.cmd();
        for (k, v) in vars {
            cmd.env(k, v);
        }
        cmd.arg("cleanup")
            .output()
            .expect("failed to run secrets-action cleanup")
    }
}
