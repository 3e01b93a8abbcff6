//! Connection management for NoteStore.

use super::NoteStore;
use super::snapshot::ReadSnapshot;
use crate::domain::contains_hashtag;
use crate::store::schema::STORE_RELATIVE_PATH;
use crate::store::{StoreError, StoreResult};
use log::debug;
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::time::Duration;

impl NoteStore {
    // ===========================================
    // Path Resolution
    // ===========================================

    /// Returns the well-known store location under the home directory.
    pub fn default_path() -> StoreResult<PathBuf> {
        let home = dirs::home_dir().ok_or(StoreError::HomeDirNotFound)?;
        Ok(home.join(STORE_RELATIVE_PATH))
    }

    // ===========================================
    // Read-Only Connection
    // ===========================================

    /// Opens the store at `path` in read-only mode.
    ///
    /// The file is never created. Lock contention is reported immediately
    /// instead of waiting for the host application to release the file.
    ///
    /// # Errors
    ///
    /// - [`StoreError::StoreNotFound`] if the file does not exist
    /// - [`StoreError::Connection`] if SQLite refuses to open it
    pub fn open(path: &Path) -> StoreResult<Self> {
        if !path.is_file() {
            return Err(StoreError::StoreNotFound {
                path: path.to_path_buf(),
            });
        }

        let connection_error = |source| StoreError::Connection {
            path: path.to_path_buf(),
            source,
        };

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(connection_error)?;
        conn.busy_timeout(Duration::ZERO).map_err(connection_error)?;
        register_functions(&conn).map_err(connection_error)?;

        debug!("opened notes store read-only at {}", path.display());
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Opens the store at its well-known location.
    pub fn open_default() -> StoreResult<Self> {
        Self::open(&Self::default_path()?)
    }

    /// Releases the connection, reporting any error SQLite raises while closing.
    pub fn close(self) -> StoreResult<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| StoreError::Query(e))?;
        debug!("closed notes store at {}", path.display());
        Ok(())
    }

    // ===========================================
    // Accessors
    // ===========================================

    /// Returns the path the store was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Begins a read snapshot so several queries observe one store state.
    pub fn snapshot(&self) -> StoreResult<ReadSnapshot<'_>> {
        ReadSnapshot::begin(&self.conn)
    }
}

/// Registers the SQL functions the queries rely on.
///
/// `has_hashtag(text, tag)` is true when `tag` is one of the hashtag tokens in
/// `text`; a null `text` never matches.
fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "has_hashtag",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            let tag: String = ctx.get(1)?;
            Ok(text.is_some_and(|t| contains_hashtag(&t, &tag)))
        },
    )
}
