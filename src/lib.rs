//! `reposim` is a library and command-line tool for measuring how similar two
//! GitHub repositories are at the source level.
//!
//! As a library, it provides a small pipeline:
//! 1.  **Acquire**: Parse a repository reference, list its tree, keep the code
//!     files and download a bounded number of them in parallel.
//! 2.  **Score**: Normalize each file and compare same-named files across the
//!     two repositories with a length-normalized edit distance.
//! 3.  **Aggregate**: Keep the pairs above the inclusion threshold, average
//!     them and rank the best ten.
//!
//! The scoring stage is pure and can be used on its own. The acquisition stage
//! talks to GitHub through the [`github::GitHubApi`] trait, so it can run
//! against the real REST API ([`github::GitHubClient`]) or any other source.
//!
//! # Example: Scoring files directly
//!
//! ```
//! use reposim::core_types::FetchedFile;
//! use reposim::similarity::{calculate_repo_similarity, MatchOptions};
//!
//! let file = |path: &str, content: &str| FetchedFile {
//!     path: path.to_string(),
//!     content: content.to_string(),
//!     size: content.len() as u64,
//! };
//!
//! let ours = vec![file("src/lib.rs", "pub fn add(a: i32, b: i32) -> i32 { a + b }")];
//! let theirs = vec![file("lib.rs", "pub fn add(x: i32, y: i32) -> i32 { x + y }")];
//!
//! let result = calculate_repo_similarity(&ours, &theirs, &MatchOptions::default());
//! assert_eq!(result.matched_files, 1);
//! assert!(result.overall_similarity > 80.0);
//! ```
//!
//! # Example: Comparing two repositories
//!
//! ```no_run
//! use reposim::{compare_repositories, ConfigBuilder, GitHubClient, MatchOptions};
//!
//! let config = ConfigBuilder::new().token_from_env().build()?;
//! let max_files = config.max_files;
//! let client = GitHubClient::new(config)?;
//!
//! let report = compare_repositories(
//!     &client,
//!     "https://github.com/rust-lang/log",
//!     "tokio-rs/tracing",
//!     max_files,
//!     &MatchOptions::default(),
//!     None,
//! )?;
//! println!("{}% similar", report.similarity.overall_similarity);
//! # Ok::<(), reposim::Error>(())
//! ```

// Make modules public if they contain public types used in the API
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod filtering;
pub mod github;
pub mod output;
pub mod prelude;
pub mod progress;
pub mod similarity;
#[cfg(feature = "web")]
pub mod web;

// Re-export key public types for easier use as a library
pub use config::{ClientConfig, ConfigBuilder};
pub use core_types::{
    ComparisonReport, FetchedFile, RepositorySimilarityResult, RepositorySnapshot,
    SimilarRepositories,
};
pub use errors::{Error, Result};
pub use github::{find_similar_repositories, GitHubApi, GitHubClient, SearchOptions};
pub use similarity::{MatchOptions, Metric};

use crate::core_types::{RepositoryInfo, RepositoryReference, RepositorySummary, TreeEntry};
use crate::filtering::{filter_code_files, repo_stats};
use crate::github::{fetch_files, fetch_tree, parse_repo_reference};
use crate::progress::ProgressReporter;
use crate::similarity::calculate_repo_similarity;

/// Takes a snapshot of one repository's code.
///
/// The tree is read at `branch`, or at the repository's declared default
/// branch when `branch` is `None`. Requesting `main` still falls back to
/// `master` once. The first `max_files` code files, in tree order, are
/// downloaded; files that fail to download are left out.
///
/// # Arguments
/// * `api` - The GitHub accessor to use.
/// * `input` - A repository URL or `owner/name`.
/// * `branch` - An explicit branch, overriding the default branch.
/// * `max_files` - How many code files to download.
/// * `progress` - Optional reporter, advanced once per attempted file.
///
/// # Returns
/// The repository metadata, the downloaded files, the number of code files in
/// the whole tree (`total_files`) and per-extension statistics.
///
/// # Errors
/// [`Error::InvalidReferenceFormat`] for malformed input. Failures reading
/// the metadata or the tree are returned as-is.
pub fn fetch_repository(
    api: &dyn GitHubApi,
    input: &str,
    branch: Option<&str>,
    max_files: usize,
    progress: Option<&dyn ProgressReporter>,
) -> Result<RepositorySnapshot> {
    let reference = parse_repo_reference(input)?;
    let info = api.repository(&reference)?;
    let branch = branch.unwrap_or(&info.default_branch);
    let tree = fetch_tree(api, &reference, Some(branch))?;

    let code_files = filter_code_files(&tree);
    let paths = select_paths(&code_files, max_files);
    log::info!(
        "{}: {} code files in tree, fetching {}",
        reference,
        code_files.len(),
        paths.len()
    );

    let files = fetch_files(api, &reference, &paths, progress);
    Ok(RepositorySnapshot {
        stats: repo_stats(&tree),
        total_files: code_files.len(),
        repo: info,
        files,
    })
}

/// Compares two repositories and summarizes both sides.
///
/// Both inputs are parsed before any request is made. Each repository's
/// metadata and tree (branch `main`, falling back to `master`) are then loaded
/// concurrently, the first `max_files` code files of each are downloaded
/// concurrently, and the two file sets are scored by
/// [`similarity::calculate_repo_similarity`].
///
/// `file_count` in each summary is the number of files selected for
/// download, before any download failures.
///
/// # Errors
/// [`Error::InvalidReferenceFormat`] for malformed input. The first failure
/// loading either repository's metadata or tree is returned as-is; individual
/// file failures only shrink the counts.
pub fn compare_repositories(
    api: &dyn GitHubApi,
    input1: &str,
    input2: &str,
    max_files: usize,
    options: &MatchOptions,
    progress: Option<&dyn ProgressReporter>,
) -> Result<ComparisonReport> {
    let ref1 = parse_repo_reference(input1)?;
    let ref2 = parse_repo_reference(input2)?;
    log::info!("Comparing {} with {}", ref1, ref2);

    let (side1, side2) = rayon::join(
        || load_repository(api, &ref1),
        || load_repository(api, &ref2),
    );
    let (info1, tree1) = side1?;
    let (info2, tree2) = side2?;

    let paths1 = select_paths(&filter_code_files(&tree1), max_files);
    let paths2 = select_paths(&filter_code_files(&tree2), max_files);

    let (files1, files2) = rayon::join(
        || fetch_files(api, &ref1, &paths1, progress),
        || fetch_files(api, &ref2, &paths2, progress),
    );

    let similarity = calculate_repo_similarity(&files1, &files2, options);
    log::info!(
        "{} vs {}: {:.2}% over {} matched pairs",
        ref1,
        ref2,
        similarity.overall_similarity,
        similarity.matched_files
    );

    Ok(ComparisonReport {
        repo1: RepositorySummary::from_info(&info1, paths1.len()),
        repo2: RepositorySummary::from_info(&info2, paths2.len()),
        similarity,
    })
}

/// Metadata plus the full tree at the default `main`/`master` branch.
fn load_repository(
    api: &dyn GitHubApi,
    reference: &RepositoryReference,
) -> Result<(RepositoryInfo, Vec<TreeEntry>)> {
    let info = api.repository(reference)?;
    let tree = fetch_tree(api, reference, None)?;
    Ok((info, tree))
}

fn select_paths(code_files: &[TreeEntry], max_files: usize) -> Vec<String> {
    code_files
        .iter()
        .take(max_files)
        .map(|entry| entry.path.clone())
        .collect()
}
