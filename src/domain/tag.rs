//! Hashtag type used for tag search and tagging.

use super::text::TRAILING_PUNCTUATION;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The marker that starts every hashtag.
pub const HASHTAG_MARKER: char = '#';

/// A hashtag, always stored with its leading marker.
///
/// Tags are matched case-sensitively, exactly as they appear in note text.
///
/// # Examples
///
/// ```
/// use apple_notes::domain::Tag;
///
/// let tag = Tag::new("todo").unwrap();
/// assert_eq!(tag.as_str(), "#todo");
///
/// // An existing marker is kept, not doubled
/// assert_eq!(Tag::new("#todo").unwrap(), tag);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a tag, prefixing the marker when it is missing.
    ///
    /// Trailing punctuation is dropped the same way [`extract_hashtags`]
    /// drops it, so `todo.` names the tag `#todo`.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the tag is empty, is only the marker (with
    /// or without punctuation), or contains whitespace (a hashtag is a single
    /// token).
    ///
    /// [`extract_hashtags`]: super::extract_hashtags
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();
        let name = trimmed
            .strip_prefix(HASHTAG_MARKER)
            .unwrap_or(trimmed)
            .trim_end_matches(TRAILING_PUNCTUATION);

        if name.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        if name.chars().any(char::is_whitespace) {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags cannot contain whitespace",
                trimmed
            )));
        }

        Ok(Self(format!("{}{}", HASHTAG_MARKER, name)))
    }

    /// Returns the tag including its marker.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_adds_missing_marker() {
        assert_eq!(Tag::new("work").unwrap().as_str(), "#work");
    }

    #[test]
    fn new_keeps_existing_marker() {
        assert_eq!(Tag::new("#work").unwrap().as_str(), "#work");
    }

    #[test]
    fn new_trims_surrounding_whitespace() {
        assert_eq!(Tag::new("  #work ").unwrap().as_str(), "#work");
    }

    #[test]
    fn new_is_case_sensitive() {
        assert_ne!(Tag::new("Work").unwrap(), Tag::new("work").unwrap());
    }

    #[test]
    fn new_rejects_empty() {
        assert!(Tag::new("").is_err());
        assert!(Tag::new("   ").is_err());
    }

    #[test]
    fn new_rejects_bare_marker() {
        assert!(Tag::new("#").is_err());
    }

    #[test]
    fn new_strips_trailing_punctuation() {
        assert_eq!(Tag::new("todo.").unwrap().as_str(), "#todo");
        assert_eq!(Tag::new("#work!?").unwrap().as_str(), "#work");
        assert_eq!(Tag::new("#done)").unwrap().as_str(), "#done");
    }

    #[test]
    fn new_rejects_marker_with_only_punctuation() {
        assert!(Tag::new("#!?").is_err());
        assert!(Tag::new("...").is_err());
    }

    #[test]
    fn new_agrees_with_miner() {
        let mined = crate::domain::extract_hashtags("buy milk #todo.");
        assert_eq!(mined, vec![Tag::new("todo.").unwrap().as_str()]);
    }

    #[test]
    fn new_rejects_inner_whitespace() {
        let err = Tag::new("two words").unwrap_err();
        assert!(err.to_string().contains("whitespace"));
    }

    #[test]
    fn serde_roundtrip_through_string() {
        let tag = Tag::new("ideas").unwrap();
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"#ideas\"");
        let back: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }
}
