//! Defines the library's error type.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can occur while talking to GitHub and scoring repositories, offering more
//! context than a bare `reqwest::Error` or `anyhow::Error`.

use thiserror::Error;

/// A `Result` alias using the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors used throughout `reposim`.
#[derive(Error, Debug)]
pub enum Error {
    // --- Input Errors ---
    /// The input was neither a `github.com/<owner>/<repo>` URL nor `<owner>/<repo>`.
    #[error("Invalid repository reference format: '{0}'")]
    InvalidReferenceFormat(String),

    // --- GitHub API Errors ---
    /// GitHub answered 404 for the requested resource.
    #[error("Not found on GitHub: {resource}")]
    RepositoryNotFound {
        /// The API path that was requested.
        resource: String,
    },

    /// GitHub answered 403 or 429, which in practice means the rate limit is exhausted.
    #[error("GitHub API rate limit exceeded or access denied: {resource}")]
    RateLimited {
        /// The API path that was requested.
        resource: String,
    },

    /// Any other non-success HTTP status.
    #[error("GitHub API returned HTTP {status} for {resource}: {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The API path that was requested.
        resource: String,
        /// The response body, or the canonical reason if the body was empty.
        message: String,
    },

    /// Transport-level failure (DNS, TLS, connection reset, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// File content could not be turned into UTF-8 text.
    #[error("Could not decode content of '{path}': {reason}")]
    Decode {
        /// The repository path of the file.
        path: String,
        /// Why decoding failed.
        reason: String,
    },

    /// Malformed JSON payload.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    // --- Configuration Errors ---
    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classifies a non-success HTTP status returned for `resource`.
    ///
    /// 404 becomes [`Error::RepositoryNotFound`], 403 and 429 become
    /// [`Error::RateLimited`], everything else becomes [`Error::Api`].
    pub fn from_status(
        status: u16,
        resource: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let resource = resource.into();
        match status {
            404 => Error::RepositoryNotFound { resource },
            403 | 429 => Error::RateLimited { resource },
            _ => Error::Api {
                status,
                resource,
                message: message.into(),
            },
        }
    }

    /// The HTTP status this error originated from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RepositoryNotFound { .. } => Some(404),
            Error::RateLimited { .. } => Some(403),
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if GitHub reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
