// src/output/formatter.rs

//! Provides helper functions for formatting parts of the text reports.

use crate::core_types::RepositorySummary;
use std::collections::BTreeMap;

/// Formats a percentage with two decimals.
///
/// # Examples
/// ```
/// use reposim::output::formatter::format_percent;
///
/// assert_eq!(format_percent(100.0), "100.00%");
/// assert_eq!(format_percent(66.666), "66.67%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// One-line description of a repository: `owner/name (Language, N stars, M files)`.
pub fn format_repo_line(summary: &RepositorySummary) -> String {
    format!(
        "{} ({}, {} stars, {} files)",
        summary.full_name,
        summary.language,
        summary.stars,
        summary.file_count
    )
}

/// Languages by descending count, then name: `rs (3), ts (1)`.
pub fn format_languages(languages: &BTreeMap<String, usize>) -> String {
    let mut entries: Vec<(&String, &usize)> = languages.iter().collect();
    // BTreeMap order makes the sort stable by name.
    entries.sort_by(|a, b| b.1.cmp(a.1));
    entries
        .iter()
        .map(|(ext, count)| format!("{} ({})", ext, count))
        .collect::<Vec<_>>()
        .join(", ")
}
