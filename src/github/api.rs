// src/github/api.rs
//! The GitHub accessors the pipeline consumes, and their REST implementation.

use crate::config::ClientConfig;
use crate::constants::GITHUB_ACCEPT;
use crate::core_types::{RepositoryInfo, RepositoryReference, TreeEntry};
use crate::errors::{Error, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// File content exactly as the Contents API returns it, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedContent {
    /// Repository path of the file.
    pub path: String,
    /// The encoded payload. GitHub omits it for files over 1 MB.
    pub content: Option<String>,
    /// The transport encoding, normally `base64`.
    pub encoding: Option<String>,
    /// Size of the decoded file in bytes.
    pub size: u64,
}

/// One repository as returned by the search accessor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    pub html_url: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// The external GitHub operations the comparison pipeline depends on.
///
/// [`GitHubClient`] implements this against the REST API. Tests and embedders
/// can supply their own implementation.
pub trait GitHubApi: Send + Sync {
    /// Reads repository metadata.
    fn repository(&self, repo: &RepositoryReference) -> Result<RepositoryInfo>;

    /// Lists every entry of `branch`, recursively.
    fn tree(&self, repo: &RepositoryReference, branch: &str) -> Result<Vec<TreeEntry>>;

    /// Reads one file's content in its transport encoding.
    fn file_content(&self, repo: &RepositoryReference, path: &str) -> Result<EncodedContent>;

    /// Searches repositories, most stars first, returning at most `per_page` hits.
    fn search_repositories(&self, query: &str, per_page: usize) -> Result<Vec<SearchHit>>;
}

// --- Wire types ---

#[derive(Deserialize, Debug)]
struct RepoResponse {
    name: String,
    full_name: String,
    description: Option<String>,
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    default_branch: String,
    html_url: String,
}

#[derive(Deserialize, Debug)]
struct TreeResponse {
    tree: Vec<TreeEntry>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    path: String,
    content: Option<String>,
    encoding: Option<String>,
    #[serde(default)]
    size: u64,
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    items: Vec<SearchHit>,
}

/// A blocking GitHub REST client built from a [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    config: ClientConfig,
}

impl GitHubClient {
    /// Builds a `reqwest` client with default headers for GitHub API interaction.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the token or user agent cannot be used as a
    /// header value, or [`Error::Http`] if the TLS backend fails to initialize.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(USER_AGENT, header_value(&config.user_agent, "user agent")?);

        if let Some(token) = &config.token {
            let mut value = header_value(&format!("Bearer {}", token), "token")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a GET request and decodes a JSON body, classifying non-success statuses.
    ///
    /// Each element of `segments` becomes one percent-encoded path segment.
    fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.config.endpoint(segments)?;
        let path = format!("/{}", segments.join("/"));
        log::debug!("GET {}", url);

        let response = self.client.get(url.clone()).query(query).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                body
            };
            log::debug!("GET {} failed with HTTP {}", url, status.as_u16());
            return Err(Error::from_status(status.as_u16(), path, message));
        }

        Ok(response.json()?)
    }
}

/// Path segments of the Contents endpoint. The file path keeps its `/`
/// separators; every other reserved character is encoded per segment.
fn contents_segments<'a>(repo: &'a RepositoryReference, path: &'a str) -> Vec<&'a str> {
    let mut segments = vec!["repos", repo.owner.as_str(), repo.name.as_str(), "contents"];
    segments.extend(path.split('/'));
    segments
}

fn header_value(raw: &str, what: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(raw)
        .map_err(|e| Error::Config(format!("Invalid {} header value: {}", what, e)))
}

impl GitHubApi for GitHubClient {
    fn repository(&self, repo: &RepositoryReference) -> Result<RepositoryInfo> {
        let segments = ["repos", repo.owner.as_str(), repo.name.as_str()];
        let info: RepoResponse = self.get_json(&segments, &[])?;
        Ok(RepositoryInfo {
            name: info.name,
            full_name: info.full_name,
            description: info.description,
            language: info.language,
            stars: info.stargazers_count,
            default_branch: info.default_branch,
            html_url: info.html_url,
        })
    }

    fn tree(&self, repo: &RepositoryReference, branch: &str) -> Result<Vec<TreeEntry>> {
        let segments = ["repos", repo.owner.as_str(), repo.name.as_str(), "git", "trees", branch];
        let response: TreeResponse =
            self.get_json(&segments, &[("recursive", "1".to_string())])?;
        if response.truncated {
            log::warn!(
                "Tree listing for {} at '{}' was truncated by GitHub; some files are missing.",
                repo,
                branch
            );
        }
        Ok(response.tree)
    }

    fn file_content(&self, repo: &RepositoryReference, path: &str) -> Result<EncodedContent> {
        let response: ContentResponse = self.get_json(&contents_segments(repo, path), &[])?;
        Ok(EncodedContent {
            path: response.path,
            content: response.content,
            encoding: response.encoding,
            size: response.size,
        })
    }

    fn search_repositories(&self, query: &str, per_page: usize) -> Result<Vec<SearchHit>> {
        let response: SearchResponse = self.get_json(
            &["search", "repositories"],
            &[
                ("q", query.to_string()),
                ("sort", "stars".to_string()),
                ("order", "desc".to_string()),
                ("per_page", per_page.to_string()),
            ],
        )?;
        Ok(response.items)
    }
}
