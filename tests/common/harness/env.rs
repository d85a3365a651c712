//! Isolated test project with a fake export tool.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::NbsiteCommand;

/// Isolated notebook project in a temp directory.
///
/// Contains a fake export script standing in for marimo: it records the
/// mode flags it was called with into the output file, so tests can
/// assert on the flag sets without the real tool installed. Cleaned up
/// automatically on drop.
pub struct TestSite {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the project root
    root: PathBuf,
}

impl TestSite {
    /// Creates a project whose fake exporter always succeeds.
    pub fn new() -> Self {
        Self::with_exporter(None)
    }

    /// Creates a project whose fake exporter fails for any source path
    /// containing `pattern`.
    pub fn with_failing_exporter(pattern: &str) -> Self {
        Self::with_exporter(Some(pattern))
    }

    fn with_exporter(fail_pattern: Option<&str>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();

        let script_path = root.join("fake-marimo");
        fs::write(&script_path, fake_exporter_script(fail_pattern))
            .expect("Failed to write fake exporter");
        fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake exporter executable");

        let config = format!(
            "[export]\nprogram = \"{}\"\nargs = []\n",
            script_path.display()
        );
        fs::write(root.join("nbsite.toml"), config).expect("Failed to write nbsite.toml");

        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the default output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join("_site")
    }

    /// Writes a notebook source under `notebooks/`.
    pub fn add_notebook(&self, name: &str) -> PathBuf {
        self.add_source(&format!("notebooks/{name}"))
    }

    /// Writes an app source under `apps/`.
    pub fn add_app(&self, name: &str) -> PathBuf {
        self.add_source(&format!("apps/{name}"))
    }

    /// Writes a source file at a path relative to the project root.
    pub fn add_source(&self, rel: &str) -> PathBuf {
        let path = self.root.join(rel);
        fs::create_dir_all(path.parent().expect("source path has no parent"))
            .expect("Failed to create source directory");
        fs::write(&path, "import marimo\n").expect("Failed to write source file");
        path
    }

    /// Writes an arbitrary file into the project and returns its path.
    ///
    /// Useful for custom templates and config files.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads a file from the output directory.
    pub fn read_output(&self, rel: &str) -> String {
        let path = self.output_dir().join(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Creates an NbsiteCommand running in this project.
    pub fn cmd(&self) -> NbsiteCommand {
        NbsiteCommand::new(&self.root)
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

/// Shell script that mimics the marimo export CLI closely enough for
/// tests: it understands `--mode`, `--no-show-code`, and `-o`, and
/// writes a marker document to the output path.
fn fake_exporter_script(fail_pattern: Option<&str>) -> String {
    let fail_clause = match fail_pattern {
        Some(pattern) => format!(
            "case \"$src\" in\n  *{pattern}*) echo 'synthetic export failure' >&2; exit 1 ;;\nesac\n"
        ),
        None => String::new(),
    };

    format!(
        r#"#!/bin/sh
mode=""
hide="no"
out=""
src=""
while [ $# -gt 0 ]; do
  case "$1" in
    --mode) mode="$2"; shift 2 ;;
    --no-show-code) hide="yes"; shift ;;
    -o) out="$2"; shift 2 ;;
    *) src="$1"; shift ;;
  esac
done
{fail_clause}printf '<html data-mode="%s" data-hide="%s">%s</html>' "$mode" "$hide" "$src" > "$out"
"#
    )
}
