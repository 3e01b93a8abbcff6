//! Builder for test notes with sensible defaults.

use apple_notes::store::schema::StoreRow;
use chrono::{Duration, Utc};

/// Builder for creating rows in the stand-in notes database.
///
/// Notes are created and modified "now" unless told otherwise, and live
/// unless marked deleted or untitled.
#[derive(Debug, Clone)]
pub struct TestNote {
    pk: i64,
    title: Option<String>,
    snippet: Option<String>,
    folder: Option<String>,
    created_days_ago: i64,
    modified_hours_ago: i64,
    deleted: bool,
}

impl TestNote {
    /// Creates a new live note with the given primary key and title.
    pub fn new(pk: i64, title: impl Into<String>) -> Self {
        Self {
            pk,
            title: Some(title.into()),
            snippet: None,
            folder: None,
            created_days_ago: 0,
            modified_hours_ago: 0,
            deleted: false,
        }
    }

    /// Creates a row without a title, which never counts as a live note.
    pub fn untitled(pk: i64) -> Self {
        Self {
            title: None,
            ..Self::new(pk, "")
        }
    }

    /// Sets the snippet text.
    pub fn snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Places the note in a named folder (created by the environment).
    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    pub fn created_days_ago(mut self, days: i64) -> Self {
        self.created_days_ago = days;
        self
    }

    pub fn modified_hours_ago(mut self, hours: i64) -> Self {
        self.modified_hours_ago = hours;
        self
    }

    /// Marks the note for deletion.
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    pub fn folder_name(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    /// Converts to a store row, given the primary key of its folder.
    pub fn to_row(&self, folder_pk: Option<i64>) -> StoreRow {
        let now = Utc::now();
        let mut row = match &self.title {
            Some(title) => StoreRow::note(self.pk, title.clone()),
            None => StoreRow::untitled(self.pk),
        }
        .created_at(now - Duration::days(self.created_days_ago))
        .modified_at(now - Duration::hours(self.modified_hours_ago));

        if let Some(snippet) = &self.snippet {
            row = row.snippet(snippet.clone());
        }
        if let Some(pk) = folder_pk {
            row = row.folder(pk);
        }
        if self.deleted {
            row = row.deleted();
        }
        row
    }
}
