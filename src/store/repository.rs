//! NoteRepository trait and result types.

use crate::domain::{Folder, Note, NoteId, NoteIdentifier, Tag};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// StoreError Type
// ===========================================

/// Errors that can occur while reading the notes store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file does not exist.
    #[error("notes database not found at {}", path.display())]
    StoreNotFound { path: PathBuf },

    /// No live note matched the lookup.
    #[error("note not found: {identifier}")]
    NoteNotFound { identifier: String },

    /// The store exists but could not be opened.
    #[error("failed to open notes database at {}: {source}", path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The home directory needed to locate the store is unknown.
    #[error("could not determine the home directory")]
    HomeDirNotFound,

    /// A query failed to execute.
    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

impl StoreError {
    /// Returns true for the user-facing not-found cases (missing store or note).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::StoreNotFound { .. } | StoreError::NoteNotFound { .. }
        )
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// Aggregate Types
// ===========================================

/// A hashtag with the number of times it occurs across live snippets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagWithCount {
    name: String,
    count: usize,
}

impl TagWithCount {
    /// Creates a new TagWithCount.
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// Returns the hashtag, including its marker.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of occurrences.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// The note with the longest snippet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LargestNote {
    pub note: Note,
    /// Snippet length in characters.
    pub chars: usize,
}

/// Counts computed directly by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreSummary {
    pub total_notes: usize,
    pub total_folders: usize,
    pub created_last_7_days: usize,
    pub created_last_30_days: usize,
    pub largest_note: Option<LargestNote>,
}

// ===========================================
// NoteRepository Trait
// ===========================================

/// Read-only queries over live notes.
///
/// A live note has a non-null title and is not marked for deletion; every
/// method applies that rule. Implementations never cache between calls.
pub trait NoteRepository {
    /// Lists live notes, newest modification first, optionally restricted to
    /// the notes whose resolved folder name equals `folder`.
    fn list_notes(&self, folder: Option<&str>) -> StoreResult<Vec<Note>>;

    /// Finds live notes whose title or snippet matches `%term%`, newest first,
    /// capped at [`SEARCH_LIMIT`].
    fn search_notes(&self, term: &str) -> StoreResult<Vec<Note>>;

    /// Finds live notes whose snippet contains `tag` as a whole hashtag token,
    /// newest first, capped at [`SEARCH_LIMIT`].
    fn search_by_hashtag(&self, tag: &Tag) -> StoreResult<Vec<Note>>;

    /// Retrieves one live note. Title lookups return the most recently
    /// modified match.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoteNotFound`] when nothing matches.
    fn get_note(&self, identifier: &NoteIdentifier) -> StoreResult<Note>;

    /// Counts live notes with exactly this title.
    fn count_by_title(&self, title: &str) -> StoreResult<usize>;

    /// Returns every resolved folder name with its live-note count, alphabetically.
    fn list_folders(&self) -> StoreResult<Vec<Folder>>;

    /// Lists live notes modified within the last `days` days, newest first,
    /// truncated to `limit`.
    fn recent_notes(&self, days: u32, limit: usize) -> StoreResult<Vec<Note>>;

    /// Lists live notes whose snippet contains an http(s) scheme, newest first.
    fn notes_with_links(&self) -> StoreResult<Vec<Note>>;

    /// Returns the non-null snippets of all live notes.
    fn live_snippets(&self) -> StoreResult<Vec<String>>;

    /// Computes the count-based statistics.
    fn summary(&self) -> StoreResult<StoreSummary>;

    /// True when attachment rows (images, files, tables) reference the note.
    /// Plain-text rewrites of such a note drop that content.
    fn has_rich_content(&self, id: NoteId) -> StoreResult<bool>;
}

/// Maximum number of rows returned by a search.
pub const SEARCH_LIMIT: usize = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_not_found_displays_identifier() {
        let error = StoreError::NoteNotFound {
            identifier: "Shopping list".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("Shopping list"));
    }

    #[test]
    fn store_not_found_displays_path() {
        let error = StoreError::StoreNotFound {
            path: PathBuf::from("/tmp/missing.sqlite"),
        };
        assert!(error.to_string().contains("/tmp/missing.sqlite"));
    }

    #[test]
    fn not_found_classification() {
        assert!(
            StoreError::NoteNotFound {
                identifier: "1".to_string()
            }
            .is_not_found()
        );
        assert!(
            StoreError::StoreNotFound {
                path: PathBuf::from("x")
            }
            .is_not_found()
        );
        assert!(!StoreError::HomeDirNotFound.is_not_found());
        assert!(!StoreError::Query(rusqlite::Error::InvalidQuery).is_not_found());
    }

    #[test]
    fn query_error_converts_from_rusqlite() {
        let error: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(error, StoreError::Query(_)));
        assert!(error.to_string().starts_with("query failed"));
    }

    #[test]
    fn tag_with_count_accessors() {
        let tag = TagWithCount::new("#todo", 3);
        assert_eq!(tag.name(), "#todo");
        assert_eq!(tag.count(), 3);
    }
}
