//! Directory scanning for `.py` notebook sources.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Errors from scanning a source directory.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("directory not found: {path}")]
    NotFound { path: PathBuf },

    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

/// Recursively finds `.py` files under `dir`.
///
/// Hidden files and directories are skipped. Results are sorted by file
/// name so the generated index has a deterministic order. Returned paths
/// keep the `dir` prefix, so `scan_source_directory("notebooks")` yields
/// paths like `notebooks/pandas_penguins.py`.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory doesn't exist.
/// Returns `FsError::NotADirectory` if the path is not a directory.
pub fn scan_source_directory(dir: &Path) -> Result<Vec<PathBuf>, FsError> {
    if !dir.exists() {
        return Err(FsError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let paths = WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(has_py_extension)
        .map(|e| e.into_path())
        .collect();

    Ok(paths)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn has_py_extension(entry: &DirEntry) -> bool {
    entry.path().extension().is_some_and(|e| e == "py")
}
