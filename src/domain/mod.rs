//! Core types: notebook sources and their derived names and paths.

mod source;

pub use source::{Category, SourceItem, display_name};
