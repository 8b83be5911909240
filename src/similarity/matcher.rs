use super::cosine::cosine_similarity;
use super::levenshtein::calculate_similarity;
use super::normalize::normalize_code;
use crate::constants::{INCLUSION_THRESHOLD, TOP_PAIRS};
use crate::core_types::{FetchedFile, FilePairScore, RepositorySimilarityResult};
use std::borrow::Cow;

/// The scoring function applied to each candidate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Metric {
    /// Length-normalized Levenshtein similarity.
    #[default]
    Levenshtein,
    /// Bag-of-words cosine similarity.
    Cosine,
}

impl Metric {
    /// Scores two texts with this metric.
    pub fn score(self, a: &str, b: &str) -> f64 {
        match self {
            Metric::Levenshtein => calculate_similarity(a, b),
            Metric::Cosine => cosine_similarity(a, b),
        }
    }
}

/// Options for [`calculate_repo_similarity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Strip comments and whitespace noise before scoring.
    pub normalize: bool,
    pub metric: Metric,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            normalize: true,
            metric: Metric::default(),
        }
    }
}

/// Scores two source texts, normalizing them first if asked to.
///
/// # Examples
/// ```
/// use reposim::similarity::compare_code_files;
///
/// let a = "fn main() { run(); } // entry point";
/// let b = "fn main() {\n    run();\n}";
/// assert_eq!(compare_code_files(a, b, true), 100.0);
/// assert!(compare_code_files(a, b, false) < 100.0);
/// ```
pub fn compare_code_files(a: &str, b: &str, normalize: bool) -> f64 {
    if normalize {
        calculate_similarity(&normalize_code(a), &normalize_code(b))
    } else {
        calculate_similarity(a, b)
    }
}

/// Final path segment.
fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Pairs files across two repositories and aggregates their similarity.
///
/// Only pairs with the same base file name, or the same full path, are
/// compared. Renamed files are never paired, even if their content is
/// identical. Each pair is scored with `options.metric`, and only scores
/// strictly above 30% count as matches.
///
/// `overall_similarity` is the mean over *all* matches, rounded to two
/// decimals; `file_pairs` keeps the ten best, highest first. Ties keep the
/// order in which the pairs were found.
pub fn calculate_repo_similarity(
    files1: &[FetchedFile],
    files2: &[FetchedFile],
    options: &MatchOptions,
) -> RepositorySimilarityResult {
    fn prepare<'a>(files: &'a [FetchedFile], options: &MatchOptions) -> Vec<Cow<'a, str>> {
        files
            .iter()
            .map(|f| {
                if options.normalize {
                    Cow::Owned(normalize_code(&f.content))
                } else {
                    Cow::Borrowed(f.content.as_str())
                }
            })
            .collect()
    }
    let texts1 = prepare(files1, options);
    let texts2 = prepare(files2, options);

    // Cheap name/path equality before the expensive scoring.
    let candidates: Vec<(usize, usize)> = files1
        .iter()
        .enumerate()
        .flat_map(|(i, f1)| {
            let name1 = base_name(&f1.path);
            files2
                .iter()
                .enumerate()
                .filter(move |(_, f2)| name1 == base_name(&f2.path) || f1.path == f2.path)
                .map(move |(j, _)| (i, j))
        })
        .collect();
    log::debug!(
        "Scoring {} candidate pairs out of {}x{} files",
        candidates.len(),
        files1.len(),
        files2.len()
    );

    // One pair at a time: each Levenshtein table is quadratic in file length.
    let mut pairs: Vec<FilePairScore> = candidates
        .iter()
        .filter_map(|&(i, j)| {
            let similarity = options.metric.score(&texts1[i], &texts2[j]);
            (similarity > INCLUSION_THRESHOLD).then(|| FilePairScore {
                file1: files1[i].path.clone(),
                file2: files2[j].path.clone(),
                similarity,
            })
        })
        .collect();

    let matched_files = pairs.len();
    let overall_similarity = if matched_files > 0 {
        let mean = pairs.iter().map(|p| p.similarity).sum::<f64>() / matched_files as f64;
        (mean * 100.0).round() / 100.0
    } else {
        0.0
    };

    pairs.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    pairs.truncate(TOP_PAIRS);

    RepositorySimilarityResult {
        overall_similarity,
        file_pairs: pairs,
        matched_files,
        total_files1: files1.len(),
        total_files2: files2.len(),
    }
}
