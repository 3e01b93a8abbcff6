//! Command handlers for the CLI.

mod archive;
mod export;
mod insights;
mod list;
mod resolve;
mod show;
mod tags;
mod write;


use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use crate::domain::Note;
use crate::store::NoteStore;

// Re-export public items
pub use archive::{handle_archive, handle_bulk_move};
pub use export::handle_export;
pub use insights::{handle_duplicates, handle_links, handle_stats};
pub use list::{handle_folders, handle_list, handle_recent, handle_search};
pub use resolve::resolve_note;
pub use show::handle_show;
pub use tags::handle_tags;
pub use write::{handle_add, handle_append, handle_delete, handle_edit, handle_move};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the notes database read-only.
pub(crate) fn open_store(store_path: &Path) -> Result<NoteStore> {
    NoteStore::open(store_path).context("failed to open notes database")
}

/// Asks the user to approve a destructive action.
pub(crate) trait Confirmer {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Reads a y/N answer from stdin.
pub(crate) struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("{} (y/N): ", prompt);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("failed to read confirmation")?;
        Ok(is_yes(&answer))
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y" | "yes" | "YES" | "Yes")
}

/// Returns `given`, or reads all of stdin after printing `prompt` to stderr.
pub(crate) fn text_or_stdin(given: Option<&str>, prompt: &str) -> Result<String> {
    if let Some(text) = given {
        return Ok(text.to_string());
    }

    eprintln!("{} (Ctrl+D when done):", prompt);
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read input")?;
    Ok(text.trim_end_matches('\n').to_string())
}

/// Formats an optional timestamp, using "-" when it is unknown.
pub(crate) fn format_timestamp(timestamp: Option<NaiveDateTime>, format: &str) -> String {
    timestamp
        .map(|t| t.format(format).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Prints notes as an aligned table.
pub(crate) fn print_note_table(notes: &[Note], show_id: bool, show_snippet: bool) {
    let mut header = String::new();
    if show_id {
        header.push_str(&format!("{:<8}  ", "ID"));
    }
    header.push_str(&format!("{:<40}  {:<20}  {:<16}", "Title", "Folder", "Modified"));
    if show_snippet {
        header.push_str("  Snippet");
    }
    println!("{}", header.trim_end());

    for note in notes {
        let mut line = String::new();
        if show_id {
            line.push_str(&format!("{:<8}  ", note.id()));
        }
        line.push_str(&format!(
            "{:<40}  {:<20}  {:<16}",
            truncate_str(note.title(), 40),
            truncate_str(note.folder(), 20),
            format_timestamp(note.modified(), "%Y-%m-%d %H:%M"),
        ));
        if show_snippet {
            let snippet = note.snippet().replace('\n', " ");
            line.push_str(&format!("  {}", truncate_str(&snippet, 60)));
        }
        println!("{}", line.trim_end());
    }
}
