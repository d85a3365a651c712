//! Configuration file support.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::export::marimo::{DEFAULT_ARGS, DEFAULT_PROGRAM};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "nbsite.toml";

/// Application configuration loaded from `nbsite.toml`.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Title shown on the generated index page
    pub site_title: String,

    /// Source root for interactive notebooks
    pub notebooks_dir: PathBuf,

    /// Source root for run-only apps
    pub apps_dir: PathBuf,

    /// External export command
    pub export: ExportConfig,
}

/// External export command configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Program to invoke
    pub program: String,

    /// Arguments placed before the per-file mode flags
    pub args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_title: "Notebooks".to_string(),
            notebooks_dir: PathBuf::from("notebooks"),
            apps_dir: PathBuf::from("apps"),
            export: ExportConfig::default(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: DEFAULT_ARGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `--config` path must exist; the default `nbsite.toml`
    /// falls back to defaults when absent.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        match cli_path {
            Some(path) => {
                if !path.exists() {
                    bail!("config file not found: {}", path.display());
                }
                Self::read(path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    return Ok(Self::default());
                }
                Self::read(path)
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }
}
