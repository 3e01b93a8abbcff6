//! Mapping from store rows to domain notes.

use crate::domain::timestamp::parse_store_datetime;
use crate::domain::{DEFAULT_FOLDER, Note, NoteId};
use rusqlite::Row;

/// Columns and joins shared by every note query.
///
/// Dates are converted to local wall-clock strings by SQLite; the reference
/// date offset (978307200 s) is added before the `unixepoch` conversion.
pub(super) const NOTE_SELECT: &str = "
    SELECT
        n.Z_PK,
        n.ZTITLE1,
        n.ZSNIPPET,
        f.ZTITLE2,
        datetime(n.ZCREATIONDATE + 978307200, 'unixepoch', 'localtime'),
        datetime(n.ZMODIFICATIONDATE1 + 978307200, 'unixepoch', 'localtime')
    FROM ZICCLOUDSYNCINGOBJECT AS n
    LEFT JOIN ZICCLOUDSYNCINGOBJECT AS f ON n.ZFOLDER = f.Z_PK";

/// The live-note rule: titled and not marked for deletion.
pub(super) const LIVE_NOTE: &str = "n.ZTITLE1 IS NOT NULL AND n.ZMARKEDFORDELETION = 0";

/// The folder name a note resolves to.
pub(super) const RESOLVED_FOLDER: &str = "COALESCE(f.ZTITLE2, 'Notes')";

/// Newest modification first; primary key keeps ties deterministic.
pub(super) const NEWEST_FIRST: &str = "ORDER BY n.ZMODIFICATIONDATE1 DESC, n.Z_PK ASC";

/// Builds a note query: shared columns, the live rule, extra conditions, and a tail.
pub(super) fn note_query(conditions: &str, tail: &str) -> String {
    format!("{NOTE_SELECT} WHERE {LIVE_NOTE} {conditions} {tail}")
}

/// A note row exactly as the store returns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub(super) struct RawNoteRow {
    pub id: i64,
    pub title: Option<String>,
    pub snippet: Option<String>,
    pub folder: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
}

impl RawNoteRow {
    /// Reads the first six columns produced by [`NOTE_SELECT`].
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            snippet: row.get(2)?,
            folder: row.get(3)?,
            created: row.get(4)?,
            modified: row.get(5)?,
        })
    }

    /// Converts the row to a note.
    ///
    /// Null text becomes empty, a missing folder becomes the default folder, and
    /// an unparseable date is left unset.
    pub fn into_note(self) -> Note {
        let created = self.created.as_deref().and_then(parse_store_datetime);
        let modified = self.modified.as_deref().and_then(parse_store_datetime);

        Note::builder(NoteId::new(self.id), self.title.unwrap_or_default())
            .snippet(self.snippet.unwrap_or_default())
            .folder(self.folder.unwrap_or_else(|| DEFAULT_FOLDER.to_string()))
            .created(created)
            .modified(modified)
            .build()
    }
}

/// Row callback for `query_map`.
pub(super) fn map_note(row: &Row<'_>) -> rusqlite::Result<Note> {
    RawNoteRow::from_row(row).map(RawNoteRow::into_note)
}
