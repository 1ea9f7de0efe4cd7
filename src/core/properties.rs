//! Properties blob parsing.
//!
//! The endpoint secret stores a newline-delimited `key = value` blob.
//! Extraction is a pure function over that text.

/// Extract the value of `key` from a `key = value` properties blob.
///
/// Lines are split on the first `=` and both sides are trimmed; the
/// first matching line wins. Returns `None` when no line matches, and
/// `Some("")` when the property is present but blank, so callers can
/// report the two cases separately.
pub fn extract(blob: &str, key: &str) -> Option<String> {
    blob.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .find(|(candidate, _)| candidate.trim() == key)
        .map(|(_, value)| value.trim().to_string())
}
