//! Finds repositories similar to a given one via GitHub search.

use super::api::{GitHubApi, SearchHit};
use super::url::parse_repo_reference;
use crate::constants::{
    DEFAULT_SEARCH_LIMIT, MAX_DESCRIPTION_TERMS, MAX_SEARCH_PAGE, MIN_STARS_QUALIFIER,
    MIN_TERM_LENGTH, UNKNOWN_LANGUAGE,
};
use crate::core_types::{
    CandidateRepository, RepositoryInfo, RepositorySummary, SimilarRepositories,
};
use crate::errors::Result;

/// Options for [`find_similar_repositories`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Explicit search terms. Empty means "derive from the repository".
    pub keywords: Vec<String>,
    /// Language qualifier; defaults to the repository's own language.
    pub language: Option<String>,
    /// Maximum number of candidates returned.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            language: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// Builds the search query for repositories similar to `repo`.
///
/// The free-text part is, in order of precedence: the explicit keywords
/// joined by spaces; the first five description words longer than three
/// characters; the repository's bare name. A `language:` qualifier follows
/// when one is given or the repository declares one, and `stars:>10` is
/// always appended.
///
/// # Examples
/// ```
/// use reposim::core_types::RepositoryInfo;
/// use reposim::github::build_search_query;
///
/// let repo = RepositoryInfo {
///     name: "ripgrep".to_string(),
///     full_name: "BurntSushi/ripgrep".to_string(),
///     description: Some("ripgrep recursively searches directories for a regex pattern".to_string()),
///     language: Some("Rust".to_string()),
///     stars: 1,
///     default_branch: "master".to_string(),
///     html_url: "https://github.com/BurntSushi/ripgrep".to_string(),
/// };
///
/// assert_eq!(
///     build_search_query(&repo, &[], None),
///     "ripgrep recursively searches directories regex language:Rust stars:>10"
/// );
/// ```
pub fn build_search_query(
    repo: &RepositoryInfo,
    keywords: &[String],
    language: Option<&str>,
) -> String {
    let terms = if !keywords.is_empty() {
        keywords.join(" ")
    } else {
        let from_description = repo
            .description
            .as_deref()
            .map(description_terms)
            .unwrap_or_default();
        if from_description.is_empty() {
            repo.name.clone()
        } else {
            from_description
        }
    };

    let mut query = terms;
    if let Some(lang) = language.or(repo.language.as_deref()) {
        query.push_str(&format!(" language:{}", lang));
    }
    query.push(' ');
    query.push_str(MIN_STARS_QUALIFIER);
    query
}

/// The first few description words long enough to be meaningful.
fn description_terms(description: &str) -> String {
    description
        .split(' ')
        .filter(|word| word.chars().count() > MIN_TERM_LENGTH)
        .take(MAX_DESCRIPTION_TERMS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Searches for repositories similar to the one `input` refers to.
///
/// One extra result is requested so that, once the original repository is
/// removed by exact full-name match, `limit` candidates remain when available.
/// The page request is capped at the search endpoint's maximum of 100.
pub fn find_similar_repositories(
    api: &dyn GitHubApi,
    input: &str,
    options: &SearchOptions,
) -> Result<SimilarRepositories> {
    let reference = parse_repo_reference(input)?;
    let original = api.repository(&reference)?;

    let query = build_search_query(&original, &options.keywords, options.language.as_deref());
    log::info!("Searching repositories similar to {}: {}", original.full_name, query);

    let per_page = options.limit.saturating_add(1).min(MAX_SEARCH_PAGE);
    let hits = api.search_repositories(&query, per_page)?;
    let similar_repos: Vec<CandidateRepository> = hits
        .into_iter()
        .filter(|hit| hit.full_name != original.full_name)
        .take(options.limit)
        .map(to_candidate)
        .collect();

    Ok(SimilarRepositories {
        original_repo: RepositorySummary::from_info(&original, 0),
        search_query: query,
        count: similar_repos.len(),
        similar_repos,
    })
}

fn to_candidate(hit: SearchHit) -> CandidateRepository {
    CandidateRepository {
        name: hit.name,
        full_name: hit.full_name,
        description: hit.description.unwrap_or_default(),
        language: hit.language.unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
        stars: hit.stars,
        url: hit.html_url,
        topics: hit.topics,
    }
}
