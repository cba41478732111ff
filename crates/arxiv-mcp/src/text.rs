//! Small text helpers shared by the feed decoder, the PDF extractor and
//! the formatters.

use std::borrow::Cow;

/// Collapse every run of whitespace (newlines included) into a single
/// space and trim both ends.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// A user-supplied search value with double quotes removed and whitespace
/// collapsed; may be empty.
#[must_use]
pub fn search_term(raw: &str) -> String {
    collapse_whitespace(&raw.replace('"', " "))
}

/// Truncate to at most `max_chars` characters, never splitting a code point.
#[must_use]
pub fn truncate_chars(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => Cow::Borrowed(&s[..idx]),
        None => Cow::Borrowed(s),
    }
}

/// Number of characters (not bytes) in `s`.
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
