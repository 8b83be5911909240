//! Defines core data structures used throughout the comparison pipeline.
//!
//! Repository references flow in, tree entries and fetched files flow through,
//! and [`RepositorySimilarityResult`] and friends flow out. All report types
//! serialize to camelCase JSON.

use crate::constants::UNKNOWN_LANGUAGE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An `owner/name` pair identifying a GitHub repository.
///
/// # Examples
///
/// ```
/// use reposim::core_types::RepositoryReference;
///
/// let repo = RepositoryReference::new("rust-lang", "cargo");
/// assert_eq!(repo.full_name(), "rust-lang/cargo");
/// assert_eq!(repo.to_string(), "rust-lang/cargo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RepositoryReference {
    /// The user or organization owning the repository.
    pub owner: String,
    /// The repository name.
    pub name: String,
}

impl RepositoryReference {
    /// Creates a reference from its two parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Returns `owner/name`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// The kind of a node in a git tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A file.
    Blob,
    /// A directory.
    Tree,
    /// A submodule pointer.
    Commit,
}

/// One node of a repository's recursive file tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// Path relative to the repository root, `/`-separated.
    pub path: String,
    /// Whether this is a file, a directory or a submodule.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// File size in bytes; GitHub omits it for directories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl TreeEntry {
    /// Convenience constructor for a file entry.
    pub fn blob(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Blob,
            size: Some(size),
        }
    }

    /// Convenience constructor for a directory entry.
    pub fn tree(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Tree,
            size: None,
        }
    }
}

/// A file whose content was downloaded and decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchedFile {
    /// Path relative to the repository root.
    pub path: String,
    /// Decoded UTF-8 text.
    pub content: String,
    /// Size in bytes as reported by GitHub.
    pub size: u64,
}

/// Similarity between one file of each repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilePairScore {
    /// Path in the first repository.
    pub file1: String,
    /// Path in the second repository.
    pub file2: String,
    /// Percentage in `[0, 100]`.
    pub similarity: f64,
}

/// Aggregate similarity between two sets of files.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySimilarityResult {
    /// Mean similarity of every matched pair, rounded to two decimals. 0 when nothing matched.
    pub overall_similarity: f64,
    /// The best-scoring pairs, highest first, at most ten.
    pub file_pairs: Vec<FilePairScore>,
    /// Number of matched pairs before truncation.
    pub matched_files: usize,
    /// Number of files on the first side.
    pub total_files1: usize,
    /// Number of files on the second side.
    pub total_files2: usize,
}

/// Repository metadata as returned by the repository info accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryInfo {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub default_branch: String,
    pub html_url: String,
}

/// Display-oriented summary of one side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub name: String,
    pub full_name: String,
    /// Empty when the repository has no description.
    pub description: String,
    /// `"Unknown"` when the repository declares no language.
    pub language: String,
    pub stars: u64,
    /// Number of files selected for comparison.
    pub file_count: usize,
}

impl RepositorySummary {
    /// Builds a summary from repository metadata and the number of selected files.
    pub fn from_info(info: &RepositoryInfo, file_count: usize) -> Self {
        Self {
            name: info.name.clone(),
            full_name: info.full_name.clone(),
            description: info.description.clone().unwrap_or_default(),
            language: info
                .language
                .clone()
                .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
            stars: info.stars,
            file_count,
        }
    }
}

/// A repository returned by a similarity search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRepository {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub language: String,
    pub stars: u64,
    pub url: String,
    pub topics: Vec<String>,
}

/// Per-extension file counts over a repository's code files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoStats {
    /// Number of code files in the tree.
    pub total_files: usize,
    /// Extension (without the dot) to file count.
    pub languages: BTreeMap<String, usize>,
    /// The most frequent extension, if there is any code file.
    pub top_language: Option<String>,
}

/// The result of fetching a single repository.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySnapshot {
    pub repo: RepositoryInfo,
    /// Successfully fetched files, in tree order.
    pub files: Vec<FetchedFile>,
    /// Number of code files in the tree before truncation.
    pub total_files: usize,
    pub stats: RepoStats,
}

/// The result of comparing two repositories.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub repo1: RepositorySummary,
    pub repo2: RepositorySummary,
    pub similarity: RepositorySimilarityResult,
}

/// The result of a similar-repository search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarRepositories {
    pub original_repo: RepositorySummary,
    /// The query string sent to the search accessor.
    pub search_query: String,
    pub similar_repos: Vec<CandidateRepository>,
    /// Number of candidates in `similar_repos`.
    pub count: usize,
}
