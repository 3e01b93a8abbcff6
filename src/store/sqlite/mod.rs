//! SQLite-backed, read-only access to the notes store.

mod connection;
mod mapper;
mod repo_impl;
mod snapshot;


use rusqlite::Connection;
use std::path::PathBuf;

pub use snapshot::ReadSnapshot;

// ===========================================
// NoteStore Struct
// ===========================================

/// A read-only connection to the notes store.
///
/// One store is opened per command and released with [`NoteStore::close`] or
/// on drop. The host application may write to the file at any time, so each
/// query sees whatever state the file is in when it runs.
#[derive(Debug)]
pub struct NoteStore {
    pub(crate) conn: Connection,
    path: PathBuf,
}
