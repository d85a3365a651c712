//! Export pipeline: marimo invocation, build orchestration, index page.

pub mod marimo;
pub mod pipeline;
pub mod site;

pub use marimo::{Exporter, MarimoExporter};
pub use pipeline::{BuildOptions, BuildReport, ExportResult, run_build};
pub use site::{DEFAULT_INDEX_TEMPLATE, IndexConfig, IndexEntry, write_index};
