// src/constants.rs

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// `Accept` header sent with every API request.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Default `User-Agent` (GitHub rejects requests without one).
pub const DEFAULT_USER_AGENT: &str = concat!("reposim/", env!("CARGO_PKG_VERSION"));

/// Number of code files fetched per repository.
pub const DEFAULT_MAX_FILES: usize = 20;

/// Branch tried first when no branch is given.
pub const DEFAULT_BRANCH: &str = "main";

/// Branch tried once when the default branch does not exist.
pub const FALLBACK_BRANCH: &str = "master";

/// A file pair counts as a match only above this similarity (percent).
pub const INCLUSION_THRESHOLD: f64 = 30.0;

/// Number of file pairs kept in a similarity result.
pub const TOP_PAIRS: usize = 10;

/// Quality floor appended to every repository search.
pub const MIN_STARS_QUALIFIER: &str = "stars:>10";

/// Number of description words used to build a search query.
pub const MAX_DESCRIPTION_TERMS: usize = 5;

/// Words of this length or shorter are skipped when building a search query.
pub const MIN_TERM_LENGTH: usize = 3;

/// Default number of similar repositories returned.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Largest `per_page` the search endpoint honours.
pub const MAX_SEARCH_PAGE: usize = 100;

/// Placeholder language for repositories that declare none.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";
