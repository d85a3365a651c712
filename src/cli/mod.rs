//! CLI definition and summary output.

pub mod config;
pub mod output;

use clap::{ArgAction, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// nbsite - publish marimo notebooks as a static HTML/WASM site
#[derive(Parser, Debug)]
#[command(name = "nbsite", version, about, long_about = None)]
pub struct Cli {
    /// Output directory for the built site
    #[arg(short = 'o', long, default_value = "_site")]
    pub output_dir: PathBuf,

    /// Config file (defaults to nbsite.toml in the current directory)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Custom index template file
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Output format for the build summary
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Per-file progress on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
