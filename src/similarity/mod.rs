//! Text similarity scoring: normalization, per-pair scorers and the
//! repository-level matcher that aggregates them.

mod cosine;
mod levenshtein;
mod matcher;
mod normalize;

pub use cosine::cosine_similarity;
pub use levenshtein::{calculate_similarity, levenshtein_distance};
pub use matcher::{calculate_repo_similarity, compare_code_files, MatchOptions, Metric};
pub use normalize::normalize_code;
