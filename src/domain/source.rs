//! Source notebook types and display name derivation.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// How a source file is exported and presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Interactive notebook, exported in edit mode with code visible.
    Notebook,
    /// Run-only app, exported in run mode with code hidden.
    App,
}

impl Category {
    /// Returns the lowercase name used in log messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Notebook => "notebook",
            Category::App => "app",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discovered notebook source file.
///
/// The path is kept relative to the project root (including the source
/// directory prefix, e.g. `notebooks/pandas_penguins.py`) so the exported
/// bundle mirrors it under the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceItem {
    path: PathBuf,
    category: Category,
}

impl SourceItem {
    pub fn new(path: impl Into<PathBuf>, category: Category) -> Self {
        Self {
            path: path.into(),
            category,
        }
    }

    /// Path to the source file, relative to the project root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Output path: the source path with its extension swapped to `.html`.
    pub fn output_path(&self) -> PathBuf {
        self.path.with_extension("html")
    }

    /// Output path as a URL href, always using forward slashes.
    pub fn href(&self) -> String {
        let parts: Vec<String> = self
            .output_path()
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        parts.join("/")
    }

    /// Human-facing name shown in the index listing.
    pub fn display_name(&self) -> String {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        display_name(&stem)
    }
}

/// Converts a file stem to a listing title.
///
/// Underscores become spaces, then the result is title-cased: a letter is
/// uppercased when the preceding character is not alphabetic and lowercased
/// otherwise.
///
/// # Examples
///
/// ```
/// use nbsite::domain::display_name;
///
/// assert_eq!(display_name("pandas_penguins"), "Pandas Penguins");
/// assert_eq!(display_name("PandaPenguins"), "Pandapenguins");
/// ```
pub fn display_name(stem: &str) -> String {
    let spaced = stem.replace('_', " ");

    let mut result = String::with_capacity(spaced.len());
    let mut prev_alphabetic = false;
    for c in spaced.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            result.push(c);
            prev_alphabetic = false;
        }
    }
    result
}
