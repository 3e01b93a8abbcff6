//! Read-only projections of note and folder rows.

use super::NoteId;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Folder name used when a note's folder reference resolves to nothing.
pub const DEFAULT_FOLDER: &str = "Notes";

/// A live note as seen by the read path.
///
/// Timestamps are local wall-clock times; a timestamp the store could not
/// provide in the expected form is `None`. The full body is only present when
/// it was fetched through the automation executor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    id: NoteId,
    title: String,
    snippet: String,
    folder: String,
    created: Option<NaiveDateTime>,
    modified: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
}

impl Note {
    /// Creates a builder with the required fields; the folder starts as [`DEFAULT_FOLDER`].
    pub fn builder(id: NoteId, title: impl Into<String>) -> NoteBuilder {
        NoteBuilder {
            id,
            title: title.into(),
            snippet: String::new(),
            folder: DEFAULT_FOLDER.to_string(),
            created: None,
            modified: None,
            body: None,
        }
    }

    /// Returns the store primary key.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the plain-text preview of the body (possibly empty).
    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    /// Returns the resolved folder display name.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Returns when the note was created, if known.
    pub fn created(&self) -> Option<NaiveDateTime> {
        self.created
    }

    /// Returns when the note was last modified, if known.
    pub fn modified(&self) -> Option<NaiveDateTime> {
        self.modified
    }

    /// Returns the full body, if it was fetched.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns a copy of this note carrying the full body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Builder for constructing a Note.
pub struct NoteBuilder {
    id: NoteId,
    title: String,
    snippet: String,
    folder: String,
    created: Option<NaiveDateTime>,
    modified: Option<NaiveDateTime>,
    body: Option<String>,
}

impl NoteBuilder {
    /// Sets the snippet.
    pub fn snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    /// Sets the folder name.
    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Sets the creation time.
    pub fn created(mut self, created: Option<NaiveDateTime>) -> Self {
        self.created = created;
        self
    }

    /// Sets the modification time.
    pub fn modified(mut self, modified: Option<NaiveDateTime>) -> Self {
        self.modified = modified;
        self
    }

    /// Builds the Note.
    pub fn build(self) -> Note {
        Note {
            id: self.id,
            title: self.title,
            snippet: self.snippet,
            folder: self.folder,
            created: self.created,
            modified: self.modified,
            body: self.body,
        }
    }
}

/// A folder name with the number of live notes resolved to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Folder {
    name: String,
    count: usize,
}

impl Folder {
    /// Creates a new Folder.
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// Returns the folder display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of live notes in the folder.
    pub fn count(&self) -> usize {
        self.count
    }
}
