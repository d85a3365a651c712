//! nbsite - publish marimo notebooks as a static HTML/WASM site

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli,
    config::Config,
    output::{Output, OutputFormat},
};
use export::{BuildOptions, BuildReport, MarimoExporter, run_build};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "nbsite", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let exporter = MarimoExporter::new(&config.export.program, config.export.args.clone());

    let opts = BuildOptions {
        output_dir: &cli.output_dir,
        notebooks_dir: &config.notebooks_dir,
        apps_dir: &config.apps_dir,
        site_title: &config.site_title,
        template_path: cli.template.as_deref(),
        verbose: cli.verbose > 0,
    };

    let report = run_build(&exporter, &opts)?;
    print_report(cli.format, &report);

    Ok(())
}

/// Prints the build summary in the requested format.
fn print_report(format: OutputFormat, report: &BuildReport) {
    match format {
        OutputFormat::Human => {
            println!(
                "Exported {} notebook{} and {} app{} to {}",
                report.notebooks_exported,
                if report.notebooks_exported == 1 { "" } else { "s" },
                report.apps_exported,
                if report.apps_exported == 1 { "" } else { "s" },
                report.output_dir,
            );
            if report.failed > 0 {
                println!("{} export(s) failed", report.failed);
            }
            if !report.index_written {
                println!("no index generated");
            }
        }
        OutputFormat::Json => {
            let output = Output::new(report);
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }
}
