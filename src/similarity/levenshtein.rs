/// Computes the Levenshtein edit distance between two strings.
///
/// Insertions, deletions and substitutions each cost 1. Strings are compared
/// by Unicode scalar value (`char`), and the full `(len1 + 1) x (len2 + 1)`
/// table is built.
///
/// # Examples
/// ```
/// use reposim::similarity::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// assert_eq!(levenshtein_distance("same", "same"), 0);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (len1, len2) = (a.len(), b.len());
    let width = len2 + 1;

    // Row-major table: cell (i, j) lives at i * width + j. Cells never exceed
    // max(len1, len2), so u32 halves the footprint of the full table.
    let mut table = vec![0u32; (len1 + 1) * width];
    for i in 0..=len1 {
        table[i * width] = i as u32;
    }
    for j in 0..=len2 {
        table[j] = j as u32;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            table[i * width + j] = if a[i - 1] == b[j - 1] {
                table[(i - 1) * width + (j - 1)]
            } else {
                let substitution = table[(i - 1) * width + (j - 1)];
                let insertion = table[i * width + (j - 1)];
                let deletion = table[(i - 1) * width + j];
                substitution.min(insertion).min(deletion) + 1
            };
        }
    }

    table[len1 * width + len2] as usize
}

/// Converts edit distance into a similarity percentage in `[0, 100]`.
///
/// `100 * (max_len - distance) / max_len`, where lengths count `char`s.
/// Identical strings (including two empty ones) score exactly 100; if exactly
/// one side is empty the score is exactly 0.
///
/// The score is relative to length: three edits in a 3 000-character file
/// barely register, while three edits in a 6-character string halve it.
///
/// # Examples
/// ```
/// use reposim::similarity::calculate_similarity;
///
/// assert_eq!(calculate_similarity("abcd", "abcd"), 100.0);
/// assert_eq!(calculate_similarity("abcd", "abce"), 75.0);
/// assert_eq!(calculate_similarity("abcd", ""), 0.0);
/// ```
pub fn calculate_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let distance = levenshtein_distance(a, b);
    let max_len = a.chars().count().max(b.chars().count());
    let similarity = (max_len - distance) as f64 * 100.0 / max_len as f64;
    similarity.clamp(0.0, 100.0)
}
