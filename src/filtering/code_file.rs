// src/filtering/code_file.rs

use crate::core_types::{EntryKind, TreeEntry};
use once_cell::sync::Lazy;
use regex::RegexSet;

/// Suffixes of files treated as source code (case-sensitive).
pub const CODE_EXTENSIONS: &[&str] = &[
    // --- Web / scripting ---
    ".js", ".ts", ".jsx", ".tsx", ".py", ".rb", ".php",
    // --- Systems / compiled ---
    ".java", ".cpp", ".c", ".h", ".go", ".rs", ".cs", ".swift", ".kt", ".scala",
    // --- Scientific / Apple ---
    ".r", ".m", ".mm",
    // --- Smart contracts ---
    ".sol", ".vy", ".move", ".cairo",
];

/// Path fragments that disqualify a file, wherever they appear in the path.
static IGNORED_PATHS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"node_modules",  // Vendored JS dependencies
        r"\.git/",        // Version-control metadata
        r"dist/",         // Build output
        r"build/",        // Build output
        r"\.next/",       // Next.js output
        r"coverage/",     // Test coverage reports
        r"\.cache/",      // Tool caches
        r"\.vscode/",     // Editor metadata
        r"\.idea/",       // IDE metadata
    ])
    .unwrap()
});

/// Checks whether a path is excluded by one of the ignored directory patterns.
///
/// Patterns are unanchored substrings, so `src/rebuild/x.rs` is excluded by `build/`.
pub fn is_ignored_path(path: &str) -> bool {
    IGNORED_PATHS.is_match(path)
}

/// Checks whether a path ends with one of the [`CODE_EXTENSIONS`].
pub fn has_code_extension(path: &str) -> bool {
    CODE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Checks if a tree entry is an in-scope code file.
///
/// An entry qualifies when it is a blob, its path contains none of the
/// ignored directory patterns, and its path ends with a code extension.
///
/// # Examples
///
/// ```
/// use reposim::core_types::TreeEntry;
/// use reposim::filtering::is_code_file;
///
/// assert!(is_code_file(&TreeEntry::blob("contracts/Token.sol", 10)));
/// assert!(is_code_file(&TreeEntry::blob("src/main.rs", 10)));
/// assert!(!is_code_file(&TreeEntry::blob("node_modules/lib/index.js", 10)));
/// assert!(!is_code_file(&TreeEntry::blob("README.md", 10)));
/// assert!(!is_code_file(&TreeEntry::tree("src.rs")));
/// ```
pub fn is_code_file(entry: &TreeEntry) -> bool {
    entry.kind == EntryKind::Blob
        && !is_ignored_path(&entry.path)
        && has_code_extension(&entry.path)
}

/// Keeps only the code files of a tree, preserving their order.
pub fn filter_code_files(entries: &[TreeEntry]) -> Vec<TreeEntry> {
    entries.iter().filter(|e| is_code_file(e)).cloned().collect()
}
