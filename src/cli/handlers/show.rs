//! Show command handler.

use anyhow::Result;
use log::warn;
use std::path::Path;

use super::resolve::{resolve_note, shared_title_warning};
use super::{format_timestamp, open_store};
use crate::automation::{AutomationExecutor, OsascriptExecutor};
use crate::cli::ShowArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::domain::Note;
use crate::store::NoteRepository;

/// A note ready for display.
#[derive(Debug)]
pub(crate) struct ShownNote {
    pub note: Note,
    /// Why the full body is missing, if it is.
    pub body_error: Option<String>,
    pub shared_title: Option<String>,
}

/// Resolves the note and fetches its full body, keeping the snippet if that fails.
pub(crate) fn fetch_note<R, E>(repo: &R, executor: &E, args: &ShowArgs) -> Result<ShownNote>
where
    R: NoteRepository + ?Sized,
    E: AutomationExecutor + ?Sized,
{
    let note = resolve_note(repo, &args.note, args.by_title)?;
    let shared_title = shared_title_warning(repo, &note);

    let (note, body_error) = match executor.note_body(note.title()) {
        Ok(body) => (note.with_body(body), None),
        Err(e) => {
            warn!("falling back to snippet for note {}: {}", note.id(), e);
            (note, Some(e.to_string()))
        }
    };

    Ok(ShownNote {
        note,
        body_error,
        shared_title,
    })
}

pub fn handle_show(args: &ShowArgs, store_path: &Path, config: &Config) -> Result<()> {
    let store = open_store(store_path)?;
    let executor = OsascriptExecutor::new(&config.osascript);
    let shown = fetch_note(&store, &executor, args)?;

    if let Some(warning) = &shown.shared_title {
        eprintln!("{}", warning);
    }

    let note = &shown.note;
    match args.format {
        OutputFormat::Human => {
            println!("ID:       {}", note.id());
            println!("Title:    {}", note.title());
            println!("Folder:   {}", note.folder());
            println!("Created:  {}", format_timestamp(note.created(), "%Y-%m-%d %H:%M:%S"));
            println!("Modified: {}", format_timestamp(note.modified(), "%Y-%m-%d %H:%M:%S"));
            println!();

            match note.body() {
                Some(body) => println!("{}", body),
                None => {
                    if let Some(e) = &shown.body_error {
                        eprintln!("warning: showing snippet only, full body unavailable: {}", e);
                    }
                    println!("{}", note.snippet());
                }
            }
        }
        OutputFormat::Json => Output::new(note).print_json()?,
    }

    Ok(())
}
