//! Downloads and decodes file contents, tolerating individual failures.

use super::api::{EncodedContent, GitHubApi};
use crate::core_types::{FetchedFile, RepositoryReference};
use crate::errors::{Error, Result};
use crate::progress::ProgressReporter;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rayon::prelude::*;

/// Fetches the given files of `repo` in parallel.
///
/// Every path is fetched independently. A path that fails for any reason
/// (HTTP error, missing file, undecodable content) is logged and left out of
/// the result; it never aborts the batch. The surviving files keep the order
/// of `paths`.
///
/// The caller is responsible for bounding `paths`.
pub fn fetch_files(
    api: &dyn GitHubApi,
    repo: &RepositoryReference,
    paths: &[String],
    progress: Option<&dyn ProgressReporter>,
) -> Vec<FetchedFile> {
    if let Some(p) = progress {
        p.inc_length(paths.len() as u64);
        p.set_message(format!("Fetching {}", repo));
    }

    let fetched: Vec<Option<FetchedFile>> = paths
        .par_iter()
        .map(|path| {
            let result = fetch_file(api, repo, path);
            if let Some(p) = progress {
                p.inc(1);
            }
            match result {
                Ok(file) => Some(file),
                Err(e) => {
                    log::warn!("Skipping '{}' from {}: {}", path, repo, e);
                    None
                }
            }
        })
        .collect();

    let files: Vec<FetchedFile> = fetched.into_iter().flatten().collect();
    log::info!(
        "Fetched {}/{} files from {}",
        files.len(),
        paths.len(),
        repo
    );
    files
}

/// Fetches and decodes a single file.
pub fn fetch_file(
    api: &dyn GitHubApi,
    repo: &RepositoryReference,
    path: &str,
) -> Result<FetchedFile> {
    let encoded = api.file_content(repo, path)?;
    let content = decode_content(&encoded)?;
    Ok(FetchedFile {
        path: path.to_string(),
        content,
        size: encoded.size,
    })
}

/// Decodes Contents API payloads into text.
///
/// `base64` payloads may contain the line breaks GitHub inserts every 60
/// characters. The decoded bytes must be valid UTF-8.
///
/// # Examples
/// ```
/// use reposim::github::{decode_content, EncodedContent};
///
/// let encoded = EncodedContent {
///     path: "hello.rs".to_string(),
///     content: Some("Zm4gbWFpbigp\nIHt9\n".to_string()),
///     encoding: Some("base64".to_string()),
///     size: 12,
/// };
/// assert_eq!(decode_content(&encoded).unwrap(), "fn main() {}");
/// ```
pub fn decode_content(encoded: &EncodedContent) -> Result<String> {
    let decode_error = |reason: String| Error::Decode {
        path: encoded.path.clone(),
        reason,
    };

    let payload = encoded
        .content
        .as_deref()
        .ok_or_else(|| decode_error("response carried no content".to_string()))?;

    let bytes = match encoded.encoding.as_deref() {
        Some("base64") => {
            let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
            STANDARD
                .decode(compact.as_bytes())
                .map_err(|e| decode_error(format!("invalid base64: {}", e)))?
        }
        Some("utf-8") | Some("utf8") => payload.as_bytes().to_vec(),
        Some(other) => return Err(decode_error(format!("unsupported encoding '{}'", other))),
        None => return Err(decode_error("missing encoding".to_string())),
    };

    String::from_utf8(bytes).map_err(|e| decode_error(format!("not UTF-8: {}", e)))
}
