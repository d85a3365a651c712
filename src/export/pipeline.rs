//! Build orchestration: discover sources, export each, build the index.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::{Category, SourceItem};
use crate::export::marimo::Exporter;
use crate::export::site::{IndexConfig, IndexEntry, write_index};
use crate::infra::{FsError, scan_source_directory};

/// Inputs for one build invocation.
pub struct BuildOptions<'a> {
    /// Directory the site is written into.
    pub output_dir: &'a Path,
    /// Source root for interactive notebooks.
    pub notebooks_dir: &'a Path,
    /// Source root for run-only apps.
    pub apps_dir: &'a Path,
    /// Title for the index page.
    pub site_title: &'a str,
    /// Custom index template replacing the built-in one.
    pub template_path: Option<&'a Path>,
    /// Per-file progress on stderr.
    pub verbose: bool,
}

/// Outcome of exporting a single source file.
///
/// Failures stay in the result list for reporting but are dropped from
/// the index; nothing is retried.
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub item: SourceItem,
    pub success: bool,
}

/// Summary of a completed build.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    /// Number of notebooks successfully exported.
    pub notebooks_exported: usize,
    /// Number of apps successfully exported.
    pub apps_exported: usize,
    /// Number of source files whose export failed.
    pub failed: usize,
    /// Whether the index page was generated.
    pub index_written: bool,
    /// Output directory the site was written to.
    pub output_dir: String,
}

/// Runs a full build: exports both source roots, then generates the index
/// from the successful exports.
///
/// Per-file export failures and index generation errors are logged to
/// stderr and reflected in the report; neither aborts the build. The only
/// hard errors are setup problems such as an uncreatable output directory.
pub fn run_build<E: Exporter>(exporter: &E, opts: &BuildOptions) -> Result<BuildReport> {
    let notebook_results = export_directory(exporter, opts.notebooks_dir, Category::Notebook, opts);
    let app_results = export_directory(exporter, opts.apps_dir, Category::App, opts);

    let notebooks = index_entries(&notebook_results);
    let apps = index_entries(&app_results);
    let failed = notebook_results
        .iter()
        .chain(app_results.iter())
        .filter(|r| !r.success)
        .count();

    let mut index_written = false;
    if notebooks.is_empty() && apps.is_empty() {
        eprintln!("warning: no notebooks or apps found, skipping index generation");
    } else {
        let config = IndexConfig {
            site_title: opts.site_title,
            template_path: opts.template_path,
        };
        match write_index(opts.output_dir, &notebooks, &apps, &config) {
            Ok(path) => {
                index_written = true;
                if opts.verbose {
                    eprintln!("wrote {}", path.display());
                }
            }
            Err(err) => {
                eprintln!("warning: failed to generate index: {err:#}");
            }
        }
    }

    Ok(BuildReport {
        notebooks_exported: notebooks.len(),
        apps_exported: apps.len(),
        failed,
        index_written,
        output_dir: opts.output_dir.display().to_string(),
    })
}

/// Exports every source file under `dir`.
///
/// A missing or unreadable source root is a warning, not an error; the
/// category simply contributes nothing to the index.
fn export_directory<E: Exporter>(
    exporter: &E,
    dir: &Path,
    category: Category,
    opts: &BuildOptions,
) -> Vec<ExportResult> {
    let sources = match scan_source_directory(dir) {
        Ok(sources) => sources,
        Err(err @ FsError::NotFound { .. }) => {
            eprintln!("warning: {err}");
            return Vec::new();
        }
        Err(err) => {
            eprintln!("warning: skipping {} sources: {err}", category);
            return Vec::new();
        }
    };

    if sources.is_empty() {
        eprintln!("warning: no {} sources found in {}", category, dir.display());
        return Vec::new();
    }

    // Mirror paths relative to the source root's parent so the root
    // directory name stays part of the output path.
    let base = dir.parent().unwrap_or_else(|| Path::new(""));

    let mut results = Vec::with_capacity(sources.len());
    for source in sources {
        let rel = source.strip_prefix(base).unwrap_or(&source).to_path_buf();
        let item = SourceItem::new(rel, category);
        let output_file = opts.output_dir.join(item.output_path());

        if opts.verbose {
            eprintln!(
                "exporting {} to {} as {}",
                source.display(),
                output_file.display(),
                category
            );
        }

        let success = match export_one(exporter, &source, category, &output_file) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("warning: failed to export {}: {err:#}", source.display());
                false
            }
        };

        results.push(ExportResult { item, success });
    }

    results
}

/// Exports one source file, creating parent directories first.
fn export_one<E: Exporter>(
    exporter: &E,
    source: &Path,
    category: Category,
    output_file: &Path,
) -> Result<()> {
    if let Some(parent) = output_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    exporter.export(source, category, output_file)
}

/// Index entries for the successful exports, in discovery order.
fn index_entries(results: &[ExportResult]) -> Vec<IndexEntry> {
    results
        .iter()
        .filter(|r| r.success)
        .map(|r| IndexEntry {
            name: r.item.display_name(),
            href: r.item.href(),
        })
        .collect()
}
