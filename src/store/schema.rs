//! The subset of the vendor schema consumed by the read path.
//!
//! The host application owns the real table, which has many more columns. The
//! definitions here recreate only the columns this crate reads, so tests,
//! benchmarks, and demos can build a stand-in store with the same shape.
//!
//! Notes and folders share one table. A note row has `ZTITLE1` set; a folder
//! row has `ZTITLE1` null and its display name in `ZTITLE2`. `ZFOLDER` on a
//! note points at the folder row's `Z_PK`. Attachment rows (images, files,
//! tables) have both titles null and point at their note through `ZNOTE`.

use crate::domain::timestamp::to_store_seconds;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};

/// Store location relative to the user's home directory.
pub const STORE_RELATIVE_PATH: &str =
    "Library/Group Containers/group.com.apple.notes/NoteStore.sqlite";

/// Creates the consumed table subset on a writable connection.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS ZICCLOUDSYNCINGOBJECT (
            Z_PK INTEGER PRIMARY KEY,
            ZTITLE1 VARCHAR,
            ZTITLE2 VARCHAR,
            ZSNIPPET VARCHAR,
            ZFOLDER INTEGER,
            ZNOTE INTEGER,
            ZTYPEUTI VARCHAR,
            ZMARKEDFORDELETION INTEGER,
            ZCREATIONDATE TIMESTAMP,
            ZMODIFICATIONDATE1 TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS ZICCLOUDSYNCINGOBJECT_ZFOLDER_INDEX
            ON ZICCLOUDSYNCINGOBJECT (ZFOLDER);

        CREATE INDEX IF NOT EXISTS ZICCLOUDSYNCINGOBJECT_ZNOTE_INDEX
            ON ZICCLOUDSYNCINGOBJECT (ZNOTE);
        "#,
    )
}

/// Inserts a folder row.
pub fn insert_folder(conn: &Connection, pk: i64, name: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO ZICCLOUDSYNCINGOBJECT (Z_PK, ZTITLE2, ZMARKEDFORDELETION)
         VALUES (?1, ?2, 0)",
        params![pk, name],
    )?;
    Ok(())
}

/// Inserts an attachment row owned by the note `note_pk`.
pub fn insert_attachment(
    conn: &Connection,
    pk: i64,
    note_pk: i64,
    type_uti: &str,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO ZICCLOUDSYNCINGOBJECT (Z_PK, ZNOTE, ZTYPEUTI, ZMARKEDFORDELETION)
         VALUES (?1, ?2, ?3, 0)",
        params![pk, note_pk, type_uti],
    )?;
    Ok(())
}

/// A note-shaped row to insert into a stand-in store.
#[derive(Debug, Clone)]
pub struct StoreRow {
    pk: i64,
    title: Option<String>,
    snippet: Option<String>,
    folder: Option<i64>,
    deleted: bool,
    created: Option<f64>,
    modified: Option<f64>,
}

impl StoreRow {
    /// A live, titled note with no folder, snippet, or timestamps.
    pub fn note(pk: i64, title: impl Into<String>) -> Self {
        Self {
            pk,
            title: Some(title.into()),
            snippet: None,
            folder: None,
            deleted: false,
            created: None,
            modified: None,
        }
    }

    /// A row with a null title (not a note).
    pub fn untitled(pk: i64) -> Self {
        Self {
            title: None,
            ..Self::note(pk, "")
        }
    }

    /// Sets the snippet.
    pub fn snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Points the row at a folder row.
    pub fn folder(mut self, folder_pk: i64) -> Self {
        self.folder = Some(folder_pk);
        self
    }

    /// Marks the row for deletion.
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Sets the raw creation value (seconds since the reference date).
    pub fn created_raw(mut self, raw: f64) -> Self {
        self.created = Some(raw);
        self
    }

    /// Sets the raw modification value (seconds since the reference date).
    pub fn modified_raw(mut self, raw: f64) -> Self {
        self.modified = Some(raw);
        self
    }

    /// Sets the creation time.
    pub fn created_at(self, at: DateTime<Utc>) -> Self {
        self.created_raw(to_store_seconds(at))
    }

    /// Sets the modification time.
    pub fn modified_at(self, at: DateTime<Utc>) -> Self {
        self.modified_raw(to_store_seconds(at))
    }

    /// Inserts the row.
    pub fn insert(&self, conn: &Connection) -> rusqlite::Result<()> {
        conn.execute(
            "INSERT INTO ZICCLOUDSYNCINGOBJECT
                (Z_PK, ZTITLE1, ZSNIPPET, ZFOLDER, ZMARKEDFORDELETION, ZCREATIONDATE, ZMODIFICATIONDATE1)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                self.pk,
                self.title,
                self.snippet,
                self.folder,
                i64::from(self.deleted),
                self.created,
                self.modified,
            ],
        )?;
        Ok(())
    }
}
