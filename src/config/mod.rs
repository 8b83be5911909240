//! Defines the `ClientConfig` struct used to construct GitHub API clients.
//!
//! Configuration is an explicit value handed to [`crate::github::GitHubClient::new`]
//! rather than ambient global state, so independent clients (e.g. one per web
//! request, or one per test against a fake server) never interfere.

use crate::constants::DEFAULT_MAX_FILES;
use crate::errors::{Error, Result};
use std::fmt;
use url::Url;

pub use builder::ConfigBuilder;
mod builder;
mod validation;

/// Settings for talking to the GitHub REST API.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the API, e.g. `https://api.github.com`.
    pub api_base_url: Url,
    /// Personal access token sent as a bearer token, if any.
    pub token: Option<String>,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// How many code files are fetched per repository.
    pub max_files: usize,
}

impl ClientConfig {
    /// Appends path segments to the base URL, percent-encoding each one.
    ///
    /// A segment may contain `/`, `#` or `?`; it is encoded rather than
    /// treated as a separator, fragment or query.
    ///
    /// # Examples
    /// ```
    /// use reposim::config::ConfigBuilder;
    ///
    /// let config = ConfigBuilder::new().build().unwrap();
    /// assert_eq!(
    ///     config.endpoint(&["repos", "rust-lang", "cargo"]).unwrap().as_str(),
    ///     "https://api.github.com/repos/rust-lang/cargo"
    /// );
    /// ```
    pub fn endpoint<S: AsRef<str>>(&self, segments: &[S]) -> Result<Url> {
        let mut url = self.api_base_url.clone();
        let base = &self.api_base_url;
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Cannot use {} as an API base", base)))?
            .pop_if_empty()
            .extend(segments.iter().map(|s| s.as_ref()));
        Ok(url)
    }

    #[doc(hidden)]
    pub fn new_for_test(base_url: &str) -> Self {
        Self {
            api_base_url: Url::parse(base_url).expect("test base URL must be valid"),
            token: None,
            user_agent: crate::constants::DEFAULT_USER_AGENT.to_string(),
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

// Custom Debug implementation so the token never ends up in logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base_url", &self.api_base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("max_files", &self.max_files)
            .finish()
    }
}
