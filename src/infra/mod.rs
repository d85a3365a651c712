//! Filesystem scanning for notebook sources.

mod fs;

pub use fs::{FsError, scan_source_directory};
