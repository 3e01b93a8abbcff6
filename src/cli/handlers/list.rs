//! Listing handlers: list, search, recent, folders.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_store, print_note_table, truncate_str};
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::{FoldersArgs, ListArgs, RecentArgs, SearchArgs};
use crate::domain::Note;
use crate::store::{NoteRepository, SEARCH_LIMIT};

pub fn handle_list(args: &ListArgs, store_path: &Path) -> Result<()> {
    let store = open_store(store_path)?;
    let mut notes = store
        .list_notes(args.folder.as_deref())
        .context("failed to list notes")?;

    if let Some(limit) = args.limit.filter(|&l| l > 0) {
        notes.truncate(limit);
    }

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
            } else {
                print_note_table(&notes, !args.hide_id, true);
                println!();
                println!("{} note(s)", notes.len());
            }
        }
        OutputFormat::Json => Output::new(&notes).print_json()?,
    }

    Ok(())
}

pub fn handle_search(args: &SearchArgs, store_path: &Path) -> Result<()> {
    let store = open_store(store_path)?;
    let notes = store
        .search_notes(&args.term)
        .with_context(|| format!("failed to search for '{}'", args.term))?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes matching '{}'.", args.term);
            } else {
                print_note_table(&notes, true, true);
                println!();
                if notes.len() == SEARCH_LIMIT {
                    println!("{} note(s) (limit reached)", notes.len());
                } else {
                    println!("{} note(s)", notes.len());
                }
            }
        }
        OutputFormat::Json => Output::new(&notes).print_json()?,
    }

    Ok(())
}

/// A resolved `recent` window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecentWindow {
    pub days: u32,
    pub limit: usize,
    pub label: String,
}

impl RecentWindow {
    /// Applies the period flags, falling back to the configured defaults.
    pub(crate) fn from_args(args: &RecentArgs, config: &Config) -> Self {
        let (days, label) = if args.today {
            (1, "today".to_string())
        } else if args.week {
            (7, "this week".to_string())
        } else {
            let days = args.days.unwrap_or(config.recent_days);
            (days, format!("the last {} days", days))
        };

        Self {
            days,
            limit: args.limit.unwrap_or(config.recent_limit),
            label,
        }
    }
}

pub fn handle_recent(args: &RecentArgs, store_path: &Path, config: &Config) -> Result<()> {
    let window = RecentWindow::from_args(args, config);
    let store = open_store(store_path)?;
    let notes: Vec<Note> = store
        .recent_notes(window.days, window.limit)
        .context("failed to get recent notes")?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes modified {}.", window.label);
            } else {
                print_note_table(&notes, true, true);
                println!();
                println!("{} note(s) modified {}", notes.len(), window.label);
            }
        }
        OutputFormat::Json => Output::new(&notes).print_json()?,
    }

    Ok(())
}

pub fn handle_folders(args: &FoldersArgs, store_path: &Path) -> Result<()> {
    let store = open_store(store_path)?;
    let folders = store.list_folders().context("failed to list folders")?;

    match args.format {
        OutputFormat::Human => {
            if folders.is_empty() {
                println!("No folders found.");
            } else {
                println!("{:<40}  {:>6}", "Folder", "Notes");
                for folder in &folders {
                    println!("{:<40}  {:>6}", truncate_str(folder.name(), 40), folder.count());
                }
                println!();
                println!("{} folder(s)", folders.len());
            }
        }
        OutputFormat::Json => Output::new(&folders).print_json()?,
    }

    Ok(())
}
