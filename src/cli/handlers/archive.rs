//! Folder-wide handlers: bulk-move and archive.

use anyhow::{Context, Result, bail};
use log::{info, warn};
use std::path::Path;

use super::write::Outcome;
use super::{Confirmer, StdinConfirmer, open_store};
use crate::automation::{AutomationExecutor, OsascriptExecutor};
use crate::cli::config::Config;
use crate::cli::date_filter::Cutoff;
use crate::cli::{ArchiveArgs, BulkMoveArgs};
use crate::domain::Note;
use crate::store::NoteRepository;

/// Creates `folder` through the host application unless it already exists.
pub(crate) fn ensure_folder<E: AutomationExecutor + ?Sized>(executor: &E, folder: &str) -> Result<()> {
    let existing = executor
        .list_folder_names()
        .context("failed to list folders")?;
    if existing.iter().any(|name| name == folder) {
        return Ok(());
    }

    info!("creating folder '{}'", folder);
    executor
        .create_folder(folder)
        .with_context(|| format!("failed to create folder '{}'", folder))
}

// ===========================================
// bulk-move
// ===========================================

pub fn handle_bulk_move(args: &BulkMoveArgs, config: &Config) -> Result<()> {
    let executor = OsascriptExecutor::new(&config.osascript);

    match bulk_move(&executor, &StdinConfirmer, args)? {
        (Outcome::Applied, moved) => {
            println!("Moved {} note(s) from '{}' to '{}'", moved, args.from, args.to)
        }
        _ => println!("Bulk move cancelled"),
    }
    Ok(())
}

pub(crate) fn bulk_move<E, C>(executor: &E, confirmer: &C, args: &BulkMoveArgs) -> Result<(Outcome, usize)>
where
    E: AutomationExecutor + ?Sized,
    C: Confirmer + ?Sized,
{
    if args.from == args.to {
        bail!("source and destination folder are both '{}'", args.from);
    }

    if !args.yes {
        let prompt = format!("Move every note from '{}' to '{}'?", args.from, args.to);
        if !confirmer.confirm(&prompt)? {
            return Ok((Outcome::Cancelled, 0));
        }
    }

    ensure_folder(executor, &args.to)?;
    let moved = executor
        .bulk_move(&args.from, &args.to)
        .with_context(|| format!("failed to move notes from '{}' to '{}'", args.from, args.to))?;
    Ok((Outcome::Applied, moved))
}

// ===========================================
// archive
// ===========================================

/// Result of an archive run.
#[derive(Debug, Default)]
pub(crate) struct ArchiveReport {
    pub candidates: Vec<Note>,
    pub moved: usize,
    pub failed: Vec<String>,
    pub cancelled: bool,
}

pub fn handle_archive(args: &ArchiveArgs, store_path: &Path, config: &Config) -> Result<()> {
    let cutoff = Cutoff::parse(&args.older_than)
        .map_err(|e| anyhow::anyhow!("invalid --older-than value: {}", e))?;
    let target = args.to.as_deref().unwrap_or(&config.archive_folder);
    let store = open_store(store_path)?;
    let executor = OsascriptExecutor::new(&config.osascript);

    let report = archive(&store, &executor, &StdinConfirmer, args, &cutoff, target)?;

    if report.candidates.is_empty() {
        println!("No notes older than {} found.", args.older_than);
    } else if report.cancelled {
        println!("Archive cancelled");
    } else {
        for title in &report.failed {
            eprintln!("warning: failed to archive '{}'", title);
        }
        println!("Archived {} note(s) to '{}'", report.moved, target);
    }
    Ok(())
}

/// Moves notes last modified before `cutoff` into `target`.
///
/// Failures on individual notes are collected rather than aborting the run.
pub(crate) fn archive<R, E, C>(
    repo: &R,
    executor: &E,
    confirmer: &C,
    args: &ArchiveArgs,
    cutoff: &Cutoff,
    target: &str,
) -> Result<ArchiveReport>
where
    R: NoteRepository + ?Sized,
    E: AutomationExecutor + ?Sized,
    C: Confirmer + ?Sized,
{
    let candidates: Vec<Note> = repo
        .list_notes(args.folder.as_deref())
        .context("failed to list notes")?
        .into_iter()
        .filter(|note| note.folder() != target && cutoff.matches(note.modified()))
        .collect();

    let mut report = ArchiveReport {
        candidates,
        ..ArchiveReport::default()
    };
    if report.candidates.is_empty() {
        return Ok(report);
    }

    if !args.yes {
        let prompt = format!(
            "Move {} note(s) not modified since {} to '{}'?",
            report.candidates.len(),
            cutoff.threshold().format("%Y-%m-%d"),
            target
        );
        if !confirmer.confirm(&prompt)? {
            report.cancelled = true;
            return Ok(report);
        }
    }

    ensure_folder(executor, target)?;
    for note in &report.candidates {
        match executor.move_note(note.title(), target) {
            Ok(()) => report.moved += 1,
            Err(e) => {
                warn!("failed to archive '{}': {}", note.title(), e);
                report.failed.push(note.title().to_string());
            }
        }
    }

    Ok(report)
}
