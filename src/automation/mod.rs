//! Write path: changes are made by the host Notes application, never by
//! writing to the store file.

mod osascript;

pub use osascript::{DEFAULT_PROGRAM, OsascriptExecutor};

use crate::domain::Tag;
use std::io;
use std::process::ExitStatus;
use thiserror::Error;

// ===========================================
// AutomationError Type
// ===========================================

/// Errors raised while driving the host application.
#[derive(Debug, Error)]
pub enum AutomationError {
    /// The automation program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The script ran and reported a failure.
    #[error("{operation} failed ({status}): {message}")]
    Script {
        operation: &'static str,
        status: ExitStatus,
        message: String,
    },

    /// The script succeeded but its output could not be interpreted.
    #[error("{operation} returned unexpected output: {output:?}")]
    UnexpectedOutput {
        operation: &'static str,
        output: String,
    },
}

/// Result type for automation operations.
pub type AutomationResult<T> = Result<T, AutomationError>;

// ===========================================
// AutomationExecutor Trait
// ===========================================

/// Operations the host application performs on our behalf.
///
/// Notes are addressed by title because that is how the application looks
/// them up; callers resolve identifiers through the store first.
pub trait AutomationExecutor {
    /// Creates a note in `folder`.
    fn create_note(&self, title: &str, body: &str, folder: &str) -> AutomationResult<()>;

    /// Replaces a note's body and title.
    fn edit_note(&self, title: &str, new_title: &str, new_body: &str) -> AutomationResult<()>;

    fn delete_note(&self, title: &str) -> AutomationResult<()>;

    fn move_note(&self, title: &str, folder: &str) -> AutomationResult<()>;

    /// Appends `content` on a new line at the end of the body.
    fn append_note(&self, title: &str, content: &str) -> AutomationResult<()>;

    /// Appends the hashtag to the end of the body.
    fn add_tag(&self, title: &str, tag: &Tag) -> AutomationResult<()>;

    /// Moves every note in `source` to `target`, returning how many moved.
    fn bulk_move(&self, source: &str, target: &str) -> AutomationResult<usize>;

    fn list_folder_names(&self) -> AutomationResult<Vec<String>>;

    /// Returns the full plain-text body of a note.
    fn note_body(&self, title: &str) -> AutomationResult<String>;

    fn create_folder(&self, name: &str) -> AutomationResult<()>;
}
