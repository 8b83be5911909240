use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"//.*").unwrap());
static BLOCK_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Scrubs C-family comments and whitespace noise from source text.
///
/// Applied in this order: `//` comments are removed up to the end of the
/// line, then `/* ... */` blocks are removed (non-greedy, across lines), then
/// every whitespace run becomes a single space and the result is trimmed.
///
/// This is a regex heuristic, not a tokenizer. It does not know about string
/// literals, so `"http://x"` loses everything after `//`, and it does not know
/// other comment syntaxes such as `#`. Both limitations are accepted.
///
/// # Examples
/// ```
/// use reposim::similarity::normalize_code;
///
/// let code = "let x = 1; // counter\n/* block\n comment */\nlet   y = 2;\n";
/// assert_eq!(normalize_code(code), "let x = 1; let y = 2;");
/// ```
pub fn normalize_code(code: &str) -> String {
    let without_line_comments = LINE_COMMENT_RE.replace_all(code, "");
    let without_block_comments = BLOCK_COMMENT_RE.replace_all(&without_line_comments, "");
    let collapsed = WHITESPACE_RE.replace_all(&without_block_comments, " ");
    let normalized = collapsed.trim().to_string();

    trace!(
        "Normalization applied. Original len: {}, New len: {}",
        code.len(),
        normalized.len()
    );
    normalized
}
