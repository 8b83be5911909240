// src/filtering/mod.rs

//! Classifies tree entries as in-scope code files.
//!
//! These functions are pure and order-preserving; the acquisition pipeline
//! uses them to decide which files to download. They are exposed publicly to
//! allow for their use in other contexts.

// Declare the sub-modules within the filtering module
mod code_file;
mod stats;

// Re-export the functions needed by other parts of the crate
pub use code_file::{
    filter_code_files, has_code_extension, is_code_file, is_ignored_path, CODE_EXTENSIONS,
};
pub use stats::repo_stats;
