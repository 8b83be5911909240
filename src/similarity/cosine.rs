use std::collections::HashMap;

/// Bag-of-words cosine similarity as a percentage in `[0, 100]`.
///
/// Both texts are lower-cased and split on whitespace; each becomes a
/// term-frequency vector over the shared vocabulary. Word order is ignored,
/// which makes this a coarser but cheaper signal than edit distance. An empty
/// text scores 0.
///
/// # Examples
/// ```
/// use reposim::similarity::cosine_similarity;
///
/// assert!((cosine_similarity("a b c", "C B A") - 100.0).abs() < 1e-9);
/// assert_eq!(cosine_similarity("alpha beta", "gamma delta"), 0.0);
/// assert_eq!(cosine_similarity("", "alpha"), 0.0);
/// ```
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    let tf1 = term_frequencies(a);
    let tf2 = term_frequencies(b);

    let dot: f64 = tf1
        .iter()
        .filter_map(|(word, &n1)| tf2.get(word).map(|&n2| n1 as f64 * n2 as f64))
        .sum();
    let magnitude1 = magnitude(&tf1);
    let magnitude2 = magnitude(&tf2);

    if magnitude1 == 0.0 || magnitude2 == 0.0 {
        return 0.0;
    }
    (dot / (magnitude1 * magnitude2) * 100.0).clamp(0.0, 100.0)
}

fn term_frequencies(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in text.split_whitespace() {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

fn magnitude(tf: &HashMap<String, usize>) -> f64 {
    tf.values()
        .map(|&n| (n * n) as f64)
        .sum::<f64>()
        .sqrt()
}
