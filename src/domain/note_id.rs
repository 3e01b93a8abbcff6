//! Store-assigned note identifiers and the explicit lookup key used to find a note.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The primary key of a note row in the store.
///
/// Keys are integers in the store but are rendered and serialized as strings so
/// that every identifier the CLI prints can be fed back in unchanged.
///
/// # Examples
///
/// ```
/// use apple_notes::domain::NoteId;
///
/// let id: NoteId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(i64);

impl NoteId {
    /// Wraps a raw primary key.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw primary key.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

/// Error returned when parsing a non-numeric note ID.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note ID '{}': expected an integer", self.value)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(NoteId)
            .map_err(|_| ParseNoteIdError {
                value: s.to_string(),
            })
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// How a single note is looked up.
///
/// The caller decides which variant applies, so a note titled `"42"` can still be
/// reached with [`NoteIdentifier::ByTitle`] without colliding with the note whose
/// primary key is 42.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteIdentifier {
    /// Match the primary key.
    ById(NoteId),
    /// Match the title exactly.
    ByTitle(String),
}

impl NoteIdentifier {
    /// Interprets user input: numeric input is an ID unless `force_title` is set.
    pub fn parse(input: &str, force_title: bool) -> Self {
        if !force_title && let Ok(id) = input.parse::<NoteId>() {
            return Self::ById(id);
        }
        Self::ByTitle(input.to_string())
    }
}

impl fmt::Display for NoteIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ById(id) => write!(f, "{}", id),
            Self::ByTitle(title) => write!(f, "{}", title),
        }
    }
}

impl From<NoteId> for NoteIdentifier {
    fn from(id: NoteId) -> Self {
        Self::ById(id)
    }
}
