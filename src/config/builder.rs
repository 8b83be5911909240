use super::validation::{normalize_token, validate_base_url, validate_max_files};
use super::ClientConfig;
use crate::cli::GlobalArgs;
use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_MAX_FILES, DEFAULT_USER_AGENT};
use crate::errors::Result;
use std::env;

/// Builds a [`ClientConfig`] from explicit values, the environment and defaults.
///
/// Explicit values always win. The `GITHUB_TOKEN` environment variable is only
/// consulted when [`ConfigBuilder::token_from_env`] was called and no token was
/// set explicitly.
///
/// # Examples
/// ```
/// use reposim::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .api_base_url("http://127.0.0.1:9000")
///     .token("ghp_example")
///     .max_files(5)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_files, 5);
/// assert_eq!(config.token.as_deref(), Some("ghp_example"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    api_base_url: Option<String>,
    token: Option<String>,
    user_agent: Option<String>,
    max_files: Option<usize>,
    token_from_env: bool,
}

impl ConfigBuilder {
    /// Creates a builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from the global command-line options.
    pub fn from_cli(args: &GlobalArgs) -> Self {
        Self {
            api_base_url: args.api_url.clone(),
            token: args.token.clone(),
            user_agent: None,
            max_files: args.max_files,
            token_from_env: true,
        }
    }

    /// Sets the API base URL.
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Sets the access token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets how many code files are fetched per repository.
    pub fn max_files(mut self, max_files: usize) -> Self {
        self.max_files = Some(max_files);
        self
    }

    /// Falls back to `GITHUB_TOKEN` when no token is set explicitly.
    pub fn token_from_env(mut self) -> Self {
        self.token_from_env = true;
        self
    }

    /// Validates the collected values and produces a [`ClientConfig`].
    ///
    /// # Errors
    /// Returns [`crate::Error::Config`] if the base URL is malformed or not
    /// http(s), or if `max_files` is zero.
    pub fn build(self) -> Result<ClientConfig> {
        let api_base_url = validate_base_url(
            self.api_base_url
                .as_deref()
                .unwrap_or(DEFAULT_API_BASE_URL),
        )?;

        let token = match normalize_token(self.token) {
            Some(token) => Some(token),
            None if self.token_from_env => normalize_token(env::var("GITHUB_TOKEN").ok()),
            None => None,
        };
        if token.is_some() {
            log::debug!("Using a GitHub token for authentication.");
        }

        let max_files = validate_max_files(self.max_files.unwrap_or(DEFAULT_MAX_FILES))?;

        Ok(ClientConfig {
            api_base_url,
            token,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            max_files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::errors::Error;
    use clap::Parser;

    #[test]
    fn test_defaults() -> Result<()> {
        let config = ConfigBuilder::new().build()?;
        assert_eq!(config.api_base_url.as_str(), "https://api.github.com/");
        assert_eq!(config.max_files, 20);
        assert_eq!(config.token, None);
        assert!(config.user_agent.starts_with("reposim/"));
        Ok(())
    }

    #[test]
    fn test_explicit_values_win() -> Result<()> {
        let config = ConfigBuilder::new()
            .api_base_url("http://localhost:4000")
            .token("abc")
            .user_agent("tester")
            .max_files(3)
            .build()?;
        assert_eq!(config.api_base_url.as_str(), "http://localhost:4000/");
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.user_agent, "tester");
        assert_eq!(config.max_files, 3);
        Ok(())
    }

    #[test]
    fn test_empty_token_is_absent() -> Result<()> {
        let config = ConfigBuilder::new().token("   ").build()?;
        assert_eq!(config.token, None);
        Ok(())
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ConfigBuilder::new().api_base_url("not a url").build(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ConfigBuilder::new().api_base_url("ftp://example.com").build(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ConfigBuilder::new().max_files(0).build(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_from_cli() -> Result<()> {
        let cli = Cli::parse_from([
            "reposim",
            "--api-url",
            "http://127.0.0.1:1234",
            "--token",
            "cli-token",
            "--max-files",
            "7",
            "fetch",
            "a/b",
        ]);
        let config = ConfigBuilder::from_cli(&cli.global).build()?;
        assert_eq!(config.api_base_url.as_str(), "http://127.0.0.1:1234/");
        assert_eq!(config.token.as_deref(), Some("cli-token"));
        assert_eq!(config.max_files, 7);
        Ok(())
    }
}
