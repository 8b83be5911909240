//! Handles parsing of GitHub repository references.

use crate::core_types::RepositoryReference;
use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for anything containing `github.com/<owner>/<repo>`.
static GITHUB_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/([^/]+)/([^/]+)").unwrap());

/// Regex for the bare `<owner>/<repo>` short form.
static SHORT_FORM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^/]+)/([^/]+)$").unwrap());

/// Parses a repository reference from a full GitHub URL or an `owner/repo` string.
///
/// One trailing slash and then one `.git` suffix are stripped before matching.
/// URLs may point deeper into the repository (e.g. `.../tree/main/src`); only
/// the owner and repository segments are kept. Segments are taken literally,
/// with no case folding or percent-decoding.
///
/// # Errors
/// Returns [`Error::InvalidReferenceFormat`] if the input matches neither form.
///
/// # Examples
/// ```
/// use reposim::github::parse_repo_reference;
///
/// let repo = parse_repo_reference("https://github.com/rust-lang/cargo.git").unwrap();
/// assert_eq!(repo.owner, "rust-lang");
/// assert_eq!(repo.name, "cargo");
///
/// let repo = parse_repo_reference("BurntSushi/ripgrep").unwrap();
/// assert_eq!(repo.full_name(), "BurntSushi/ripgrep");
///
/// assert!(parse_repo_reference("not a repository").is_err());
/// ```
pub fn parse_repo_reference(input: &str) -> Result<RepositoryReference> {
    let without_slash = input.strip_suffix('/').unwrap_or(input);
    let cleaned = without_slash.strip_suffix(".git").unwrap_or(without_slash);

    let caps = GITHUB_URL_RE
        .captures(cleaned)
        .or_else(|| SHORT_FORM_RE.captures(cleaned))
        .ok_or_else(|| Error::InvalidReferenceFormat(input.to_string()))?;

    match (caps.get(1), caps.get(2)) {
        (Some(owner), Some(name)) => Ok(RepositoryReference::new(owner.as_str(), name.as_str())),
        _ => Err(Error::InvalidReferenceFormat(input.to_string())),
    }
}
