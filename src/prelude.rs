//! The `reposim` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `reposim` library.
//!
//! # Example
//!
//! ```
//! use reposim::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let repo = parse_repo_reference("https://github.com/rust-lang/cargo.git")?;
//! assert_eq!(repo.full_name(), "rust-lang/cargo");
//!
//! let score = compare_code_files("let x = 1; // one", "let x = 1;", true);
//! assert_eq!(score, 100.0);
//! # Ok(())
//! # }
//! ```

pub use crate::config::{ClientConfig, ConfigBuilder};
pub use crate::core_types::{
    ComparisonReport, FetchedFile, FilePairScore, RepositoryReference, RepositorySimilarityResult,
    RepositorySnapshot, SimilarRepositories, TreeEntry,
};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{filter_code_files, repo_stats};
pub use crate::github::{
    fetch_tree, find_similar_repositories, parse_repo_reference, GitHubApi, GitHubClient,
    SearchOptions,
};
pub use crate::progress::{NoOpProgress, ProgressReporter};
pub use crate::similarity::{
    calculate_repo_similarity, calculate_similarity, compare_code_files, normalize_code,
    MatchOptions, Metric,
};
pub use crate::{compare_repositories, fetch_repository};
