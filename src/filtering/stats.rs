// src/filtering/stats.rs

use super::code_file::filter_code_files;
use crate::core_types::{RepoStats, TreeEntry};
use std::collections::BTreeMap;

/// Counts code files per extension.
///
/// The extension is whatever follows the final `.` of the path. The top
/// language is the most frequent extension; ties go to the alphabetically
/// first one.
///
/// # Examples
/// ```
/// use reposim::core_types::TreeEntry;
/// use reposim::filtering::repo_stats;
///
/// let tree = vec![
///     TreeEntry::blob("src/a.rs", 1),
///     TreeEntry::blob("src/b.rs", 1),
///     TreeEntry::blob("web/app.ts", 1),
///     TreeEntry::blob("README.md", 1),
/// ];
/// let stats = repo_stats(&tree);
/// assert_eq!(stats.total_files, 3);
/// assert_eq!(stats.languages["rs"], 2);
/// assert_eq!(stats.top_language.as_deref(), Some("rs"));
/// ```
pub fn repo_stats(entries: &[TreeEntry]) -> RepoStats {
    let code_files = filter_code_files(entries);

    let mut languages: BTreeMap<String, usize> = BTreeMap::new();
    for file in &code_files {
        if let Some((_, ext)) = file.path.rsplit_once('.') {
            *languages.entry(ext.to_string()).or_insert(0) += 1;
        }
    }

    let mut top_language: Option<(&String, usize)> = None;
    for (ext, &count) in &languages {
        if top_language.map_or(true, |(_, best)| count > best) {
            top_language = Some((ext, count));
        }
    }
    let top_language = top_language.map(|(ext, _)| ext.clone());

    RepoStats {
        total_files: code_files.len(),
        languages,
        top_language,
    }
}
