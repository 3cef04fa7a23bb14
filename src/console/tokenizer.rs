//! Console line tokenizer.

/// Lowercase the line and split it on whitespace.
///
/// Runs of whitespace never yield empty tokens. There is no quoting, so
/// `echo "a b"` produces `["echo", "\"a", "b\""]`.
pub fn tokenize(line: &str) -> Vec<String> {
    line.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
