//! Token miners over plain-text snippets.

use super::tag::HASHTAG_MARKER;

/// Punctuation stripped from the end of a hashtag token.
pub const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', ')'];

/// URL schemes recognised by [`extract_urls`].
pub const URL_SCHEMES: &[&str] = &["http://", "https://"];

/// Extracts hashtags from whitespace-separated tokens, in order, duplicates included.
///
/// A token counts when it starts with `#` and is longer than the bare marker
/// once trailing punctuation is removed.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| word.starts_with(HASHTAG_MARKER))
        .map(|word| word.trim_end_matches(TRAILING_PUNCTUATION))
        .filter(|tag| tag.len() > HASHTAG_MARKER.len_utf8())
        .map(str::to_string)
        .collect()
}

/// Returns true if `tag` (including its marker) is one of the hashtags in `text`.
pub fn contains_hashtag(text: &str, tag: &str) -> bool {
    extract_hashtags(text).iter().any(|t| t == tag)
}

/// Extracts tokens that start with an http(s) scheme, in order.
///
/// Tokens are taken verbatim: trailing punctuation stays part of the URL.
pub fn extract_urls(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| URL_SCHEMES.iter().any(|scheme| word.starts_with(scheme)))
        .map(str::to_string)
        .collect()
}
