//! Invocation of the external marimo export tool.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

use crate::domain::Category;

/// Default program used to run the export tool.
pub const DEFAULT_PROGRAM: &str = "uvx";

/// Default arguments placed before the mode flags.
pub const DEFAULT_ARGS: &[&str] = &["marimo", "export", "html-wasm", "--sandbox"];

/// Abstraction over the external export command (allows substituting a
/// fake in tests).
pub trait Exporter {
    /// Exports one source file, writing the HTML/WASM bundle to `output_file`.
    fn export(&self, source: &Path, category: Category, output_file: &Path) -> Result<()>;
}

/// Exporter that shells out to `marimo export html-wasm`.
///
/// Apps are exported with `--mode run --no-show-code`; notebooks with
/// `--mode edit`. One subprocess at a time, synchronous wait.
pub struct MarimoExporter {
    program: String,
    base_args: Vec<String>,
}

impl MarimoExporter {
    pub fn new(program: impl Into<String>, base_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            base_args,
        }
    }

    /// Returns the full argument list for exporting `source` to `output_file`.
    fn build_args(&self, source: &Path, category: Category, output_file: &Path) -> Vec<String> {
        let mut args = self.base_args.clone();
        match category {
            Category::App => {
                args.extend(["--mode", "run", "--no-show-code"].map(String::from));
            }
            Category::Notebook => {
                args.extend(["--mode", "edit"].map(String::from));
            }
        }
        args.push(source.to_string_lossy().into_owned());
        args.push("-o".to_string());
        args.push(output_file.to_string_lossy().into_owned());
        args
    }
}

impl Default for MarimoExporter {
    fn default() -> Self {
        Self::new(
            DEFAULT_PROGRAM,
            DEFAULT_ARGS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl Exporter for MarimoExporter {
    fn export(&self, source: &Path, category: Category, output_file: &Path) -> Result<()> {
        let args = self.build_args(source, category, output_file);

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .with_context(|| format!("failed to launch export command '{}'", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "export command exited with {}: {}",
                output.status,
                stderr.trim()
            );
        }

        Ok(())
    }
}
