// src/config/validation.rs

use crate::errors::{Error, Result};
use url::Url;

/// Parses the API base URL and checks that it is http(s).
pub(super) fn validate_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| Error::Config(format!("Invalid API base URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!(
            "API base URL must use http or https, got '{}'",
            other
        ))),
    }
}

/// Rejects a zero file cap.
pub(super) fn validate_max_files(max_files: usize) -> Result<usize> {
    if max_files == 0 {
        return Err(Error::Config(
            "--max-files must be at least 1".to_string(),
        ));
    }
    Ok(max_files)
}

/// Trims a token and treats an empty one as absent.
pub(super) fn normalize_token(token: Option<String>) -> Option<String> {
    token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("https://api.github.com").is_ok());
        assert!(validate_base_url("http://127.0.0.1:8080/api/v3").is_ok());
        assert!(validate_base_url("file:///etc/passwd").is_err());
        assert!(validate_base_url("::").is_err());
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token(None), None);
        assert_eq!(normalize_token(Some(String::new())), None);
        assert_eq!(
            normalize_token(Some(" tok \n".to_string())),
            Some("tok".to_string())
        );
    }
}
