//! Core types: Note, Folder, Tag, NoteId, timestamps, and text miners

mod note;
mod note_id;
mod tag;
pub mod text;
pub mod timestamp;

pub use note::{DEFAULT_FOLDER, Folder, Note, NoteBuilder};
pub use note_id::{NoteId, NoteIdentifier, ParseNoteIdError};
pub use tag::{HASHTAG_MARKER, ParseTagError, Tag};
pub use text::{contains_hashtag, extract_hashtags, extract_urls};
