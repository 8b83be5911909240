// src/output/mod.rs

//! Renders reports as human-readable text or JSON to any writer.

use crate::constants::INCLUSION_THRESHOLD;
use crate::core_types::{ComparisonReport, RepositorySnapshot, SimilarRepositories};
use crate::errors::Result;
use log::debug;
use serde::Serialize;
use std::io::Write;

pub mod formatter;

use formatter::{format_languages, format_percent, format_repo_line};

/// How a report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// Pretty-printed camelCase JSON.
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes a two-repository comparison.
pub fn write_comparison(
    writer: &mut dyn Write,
    report: &ComparisonReport,
    format: OutputFormat,
) -> Result<()> {
    debug!("Writing comparison report as {:?}", format);
    if format == OutputFormat::Json {
        return write_json(writer, report);
    }

    let result = &report.similarity;
    writeln!(writer, "Comparing {}", format_repo_line(&report.repo1))?;
    writeln!(writer, "     with {}", format_repo_line(&report.repo2))?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Overall similarity: {}",
        format_percent(result.overall_similarity)
    )?;
    writeln!(
        writer,
        "Matched files: {} (fetched {} and {})",
        result.matched_files, result.total_files1, result.total_files2
    )?;

    if result.file_pairs.is_empty() {
        writeln!(
            writer,
            "\nNo file pairs scored above {}.",
            format_percent(INCLUSION_THRESHOLD)
        )?;
    } else {
        writeln!(writer, "\nTop matching files:")?;
        for pair in &result.file_pairs {
            writeln!(
                writer,
                "  {:>7}  {} <-> {}",
                format_percent(pair.similarity),
                pair.file1,
                pair.file2
            )?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Writes a single-repository snapshot. The text form lists files, not content.
pub fn write_snapshot(
    writer: &mut dyn Write,
    snapshot: &RepositorySnapshot,
    format: OutputFormat,
) -> Result<()> {
    debug!("Writing snapshot of {} as {:?}", snapshot.repo.full_name, format);
    if format == OutputFormat::Json {
        return write_json(writer, snapshot);
    }

    let repo = &snapshot.repo;
    writeln!(writer, "## {}", repo.full_name)?;
    if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
        writeln!(writer, "{}", description)?;
    }
    writeln!(
        writer,
        "Language: {} | Stars: {} | Default branch: {}",
        repo.language.as_deref().unwrap_or(crate::constants::UNKNOWN_LANGUAGE),
        repo.stars,
        repo.default_branch
    )?;
    writeln!(
        writer,
        "Code files: {} (fetched {})",
        snapshot.total_files,
        snapshot.files.len()
    )?;
    if !snapshot.stats.languages.is_empty() {
        writeln!(writer, "Extensions: {}", format_languages(&snapshot.stats.languages))?;
    }

    if !snapshot.files.is_empty() {
        writeln!(writer, "\nFetched files:")?;
        for file in &snapshot.files {
            writeln!(writer, "- {} ({} bytes)", file.path, file.size)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Writes the result of a similar-repository search.
pub fn write_similar(
    writer: &mut dyn Write,
    similar: &SimilarRepositories,
    format: OutputFormat,
) -> Result<()> {
    debug!(
        "Writing {} similar repositories as {:?}",
        similar.similar_repos.len(),
        format
    );
    if format == OutputFormat::Json {
        return write_json(writer, similar);
    }

    writeln!(writer, "Similar to {}", similar.original_repo.full_name)?;
    writeln!(writer, "Query: {}", similar.search_query)?;

    if similar.similar_repos.is_empty() {
        writeln!(writer, "\nNo similar repositories found.")?;
    }
    for (i, candidate) in similar.similar_repos.iter().enumerate() {
        writeln!(
            writer,
            "\n{}. {} ({}, {} stars)",
            i + 1,
            candidate.full_name,
            candidate.language,
            candidate.stars
        )?;
        if !candidate.description.is_empty() {
            writeln!(writer, "   {}", candidate.description)?;
        }
        writeln!(writer, "   {}", candidate.url)?;
    }
    writer.flush()?;
    Ok(())
}
