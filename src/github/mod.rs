// src/github/mod.rs
//! Acquires repository content from the GitHub REST API.
//!
//! This module provides functionality to:
//! - Parse repository references (full URLs or `owner/repo`).
//! - Fetch recursive tree listings, falling back from `main` to `master` once.
//! - Download and decode file contents in parallel, dropping individual failures.
//! - Search for repositories similar to a given one.

// Declare the sub-modules.
mod api;
mod content;
mod search;
#[cfg(test)]
pub(crate) mod testing;
mod tree;
mod url;

// Re-export the public-facing API.
pub use api::{EncodedContent, GitHubApi, GitHubClient, SearchHit};
pub use content::{decode_content, fetch_file, fetch_files};
pub use search::{build_search_query, find_similar_repositories, SearchOptions};
pub use tree::{fetch_tree, BranchFallback};
pub use url::parse_repo_reference;
