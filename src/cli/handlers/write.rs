//! Single-note write handlers: add, edit, delete, move, append.
//!
//! Notes are resolved through the store, then changed by the host application.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::resolve::{resolve_note, shared_title_warning};
use super::{Confirmer, StdinConfirmer, open_store, text_or_stdin};
use crate::automation::{AutomationExecutor, OsascriptExecutor};
use crate::cli::config::Config;
use crate::cli::{AddArgs, AppendArgs, DeleteArgs, EditArgs, MoveArgs};
use crate::domain::Note;
use crate::store::NoteRepository;

/// What a write handler ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Applied,
    Cancelled,
    /// Nothing to do; the note is already in the requested state.
    Unchanged,
}

fn resolve_for_write<R: NoteRepository + ?Sized>(
    repo: &R,
    input: &str,
    by_title: bool,
) -> Result<Note> {
    let note = resolve_note(repo, input, by_title)?;
    if let Some(warning) = shared_title_warning(repo, &note) {
        eprintln!("{}", warning);
    }
    Ok(note)
}

// ===========================================
// add
// ===========================================

pub fn handle_add(args: &AddArgs, config: &Config) -> Result<()> {
    let folder = args.folder.as_deref().unwrap_or(&config.default_folder);
    let body = text_or_stdin(args.body.as_deref(), "Enter note body")?;
    let executor = OsascriptExecutor::new(&config.osascript);

    create_note(&executor, &args.title, &body, folder)?;
    println!("Created '{}' in '{}'", args.title, folder);
    Ok(())
}

pub(crate) fn create_note<E: AutomationExecutor + ?Sized>(
    executor: &E,
    title: &str,
    body: &str,
    folder: &str,
) -> Result<()> {
    executor
        .create_note(title, body, folder)
        .with_context(|| format!("failed to create '{}' in '{}'", title, folder))
}

// ===========================================
// edit
// ===========================================

pub fn handle_edit(args: &EditArgs, store_path: &Path, config: &Config) -> Result<()> {
    let store = open_store(store_path)?;
    let executor = OsascriptExecutor::new(&config.osascript);
    let read_body = || text_or_stdin(None, "Enter new body");

    let (note, outcome) = edit_note(&store, &executor, &StdinConfirmer, args, read_body)?;
    match outcome {
        Outcome::Applied => println!("Updated '{}' [{}]", note.title(), note.id()),
        _ => println!("Edit cancelled"),
    }
    Ok(())
}

/// Replaces a note's title and body; the body comes from `--body` or `read_body`.
///
/// Notes with attachments are refused before any input is read unless
/// `--force-unsafe` is given, even with `--yes`.
pub(crate) fn edit_note<R, E, C, F>(
    repo: &R,
    executor: &E,
    confirmer: &C,
    args: &EditArgs,
    read_body: F,
) -> Result<(Note, Outcome)>
where
    R: NoteRepository + ?Sized,
    E: AutomationExecutor + ?Sized,
    C: Confirmer + ?Sized,
    F: FnOnce() -> Result<String>,
{
    let note = resolve_for_write(repo, &args.note, args.by_title)?;
    let rich = repo
        .has_rich_content(note.id())
        .with_context(|| format!("failed to inspect '{}' for attachments", note.title()))?;
    if rich {
        if !args.force_unsafe {
            bail!(
                "edit blocked: '{}' contains attachments or rich content that editing would \
                 destroy; edit it in Notes or pass --force-unsafe",
                note.title()
            );
        }
        eprintln!(
            "warning: '{}' contains attachments or rich content that will be lost",
            note.title()
        );
    }

    let new_title = args.title.as_deref().unwrap_or(note.title());
    let new_body = match &args.body {
        Some(body) => body.clone(),
        None => read_body()?,
    };

    if !args.yes {
        let prompt = format!(
            "Replace the body of '{}'? Images, attachments and formatting will be lost.",
            note.title()
        );
        if !confirmer.confirm(&prompt)? {
            return Ok((note, Outcome::Cancelled));
        }
    }

    executor
        .edit_note(note.title(), new_title, &new_body)
        .with_context(|| format!("failed to edit '{}'", note.title()))?;
    Ok((note, Outcome::Applied))
}

// ===========================================
// delete
// ===========================================

pub fn handle_delete(args: &DeleteArgs, store_path: &Path, config: &Config) -> Result<()> {
    let store = open_store(store_path)?;
    let executor = OsascriptExecutor::new(&config.osascript);

    let (note, outcome) = delete_note(&store, &executor, &StdinConfirmer, args)?;
    match outcome {
        Outcome::Applied => println!("Deleted '{}' [{}]", note.title(), note.id()),
        _ => println!("Deletion cancelled"),
    }
    Ok(())
}

pub(crate) fn delete_note<R, E, C>(
    repo: &R,
    executor: &E,
    confirmer: &C,
    args: &DeleteArgs,
) -> Result<(Note, Outcome)>
where
    R: NoteRepository + ?Sized,
    E: AutomationExecutor + ?Sized,
    C: Confirmer + ?Sized,
{
    let note = resolve_for_write(repo, &args.note, args.by_title)?;

    if !args.yes {
        let prompt = format!("Delete '{}' from '{}'?", note.title(), note.folder());
        if !confirmer.confirm(&prompt)? {
            return Ok((note, Outcome::Cancelled));
        }
    }

    executor
        .delete_note(note.title())
        .with_context(|| format!("failed to delete '{}'", note.title()))?;
    Ok((note, Outcome::Applied))
}

// ===========================================
// move
// ===========================================

pub fn handle_move(args: &MoveArgs, store_path: &Path, config: &Config) -> Result<()> {
    let store = open_store(store_path)?;
    let executor = OsascriptExecutor::new(&config.osascript);

    let (note, outcome) = move_note(&store, &executor, args)?;
    match outcome {
        Outcome::Unchanged => println!("'{}' is already in '{}'", note.title(), args.folder),
        _ => println!("Moved '{}' from '{}' to '{}'", note.title(), note.folder(), args.folder),
    }
    Ok(())
}

pub(crate) fn move_note<R, E>(repo: &R, executor: &E, args: &MoveArgs) -> Result<(Note, Outcome)>
where
    R: NoteRepository + ?Sized,
    E: AutomationExecutor + ?Sized,
{
    let note = resolve_for_write(repo, &args.note, args.by_title)?;
    if note.folder() == args.folder {
        return Ok((note, Outcome::Unchanged));
    }

    executor
        .move_note(note.title(), &args.folder)
        .with_context(|| format!("failed to move '{}' to '{}'", note.title(), args.folder))?;
    Ok((note, Outcome::Applied))
}

// ===========================================
// append
// ===========================================

pub fn handle_append(args: &AppendArgs, store_path: &Path, config: &Config) -> Result<()> {
    let store = open_store(store_path)?;
    let executor = OsascriptExecutor::new(&config.osascript);
    let read_content = || text_or_stdin(None, "Enter content to append");

    let note = append_note(&store, &executor, args, read_content)?;
    println!("Appended to '{}' [{}]", note.title(), note.id());
    Ok(())
}

pub(crate) fn append_note<R, E, F>(
    repo: &R,
    executor: &E,
    args: &AppendArgs,
    read_content: F,
) -> Result<Note>
where
    R: NoteRepository + ?Sized,
    E: AutomationExecutor + ?Sized,
    F: FnOnce() -> Result<String>,
{
    let note = resolve_for_write(repo, &args.note, args.by_title)?;
    let content = match &args.content {
        Some(content) => content.clone(),
        None => read_content()?,
    };

    executor
        .append_note(note.title(), &content)
        .with_context(|| format!("failed to append to '{}'", note.title()))?;
    Ok(note)
}
