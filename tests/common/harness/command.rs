//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared across test files
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `nbsite` binary.
///
/// Runs the binary with the given project root as working directory so
/// the relative source roots and `nbsite.toml` resolve like they would
/// in a real checkout.
pub struct NbsiteCommand {
    current_dir: PathBuf,
    args: Vec<String>,
}

impl NbsiteCommand {
    /// Creates a new command running in `project_root`.
    pub fn new(project_root: &Path) -> Self {
        Self {
            current_dir: project_root.to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Sets the `--output-dir` option.
    pub fn output_dir(self, dir: &str) -> Self {
        self.args(["--output-dir", dir])
    }

    /// Sets `--format json` for a machine-readable summary.
    pub fn json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("nbsite").expect("Failed to find nbsite binary");
        cmd.current_dir(&self.current_dir);
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }
}
