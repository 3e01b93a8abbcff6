//! Note resolution utilities.

use anyhow::Result;
use log::debug;

use crate::domain::{Note, NoteIdentifier};
use crate::store::NoteRepository;

/// Resolves user input to one live note.
///
/// Numeric input is looked up as a primary key unless `by_title` is set;
/// anything else is an exact title match, most recently modified first.
pub fn resolve_note<R: NoteRepository + ?Sized>(
    repo: &R,
    input: &str,
    by_title: bool,
) -> Result<Note> {
    let identifier = NoteIdentifier::parse(input.trim(), by_title);
    Ok(repo.get_note(&identifier)?)
}

/// Describes how many live notes share `note`'s title, if more than one does.
///
/// Automation addresses notes by title, so a shared title means the host
/// application may act on a different copy.
pub(crate) fn shared_title_warning<R: NoteRepository + ?Sized>(
    repo: &R,
    note: &Note,
) -> Option<String> {
    match repo.count_by_title(note.title()) {
        Ok(count) if count > 1 => Some(format!(
            "warning: {} notes are titled '{}'; using the most recently modified",
            count,
            note.title()
        )),
        Ok(_) => None,
        Err(e) => {
            debug!("could not count notes titled {:?}: {}", note.title(), e);
            None
        }
    }
}
