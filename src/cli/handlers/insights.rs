//! Derived-view handlers: stats, duplicates, links.

use anyhow::{Context, Result};
use std::path::Path;

use super::{format_timestamp, open_store, print_note_table, truncate_str};
use crate::cli::output::{DuplicateListing, LinkListing, Output, OutputFormat};
use crate::cli::{DuplicatesArgs, LinksArgs, StatsArgs};
use crate::domain::NoteIdentifier;
use crate::store::NoteRepository;
use crate::store::views::{self, NoteLinks, Stats};

pub fn handle_stats(args: &StatsArgs, store_path: &Path) -> Result<()> {
    let store = open_store(store_path)?;
    let stats = store.stats().context("failed to compute statistics")?;

    match args.format {
        OutputFormat::Human => print_stats(&stats),
        OutputFormat::Json => Output::new(&stats).print_json()?,
    }

    Ok(())
}

fn print_stats(stats: &Stats) {
    let summary = &stats.summary;
    println!("Notes:              {}", summary.total_notes);
    println!("Folders:            {}", summary.total_folders);
    println!("Created (7 days):   {}", summary.created_last_7_days);
    println!("Created (30 days):  {}", summary.created_last_30_days);

    if let Some(largest) = &summary.largest_note {
        println!(
            "Largest note:       {} [{}] ({} chars)",
            truncate_str(largest.note.title(), 50),
            largest.note.id(),
            largest.chars
        );
    }

    println!();
    match &stats.tags_error {
        Some(e) => println!("Top tags unavailable: {}", e),
        None if stats.top_tags.is_empty() => println!("No tags found."),
        None => {
            println!("Top tags:");
            for tag in &stats.top_tags {
                println!("  {:<30}  {:>5}", tag.name(), tag.count());
            }
        }
    }
}

pub fn handle_duplicates(args: &DuplicatesArgs, store_path: &Path) -> Result<()> {
    let store = open_store(store_path)?;
    let groups = views::find_duplicates(&store).context("failed to find duplicates")?;

    match args.format {
        OutputFormat::Human => {
            if groups.is_empty() {
                println!("No duplicate titles found.");
                return Ok(());
            }

            for group in &groups {
                println!("'{}' ({} notes)", group[0].title(), group.len());
                for note in group {
                    println!(
                        "  {:<8}  {:<20}  {}",
                        note.id(),
                        truncate_str(note.folder(), 20),
                        format_timestamp(note.modified(), "%Y-%m-%d %H:%M")
                    );
                }
                println!();
            }
            println!("{} duplicate title(s)", groups.len());
        }
        OutputFormat::Json => {
            let listings: Vec<DuplicateListing> = groups
                .iter()
                .map(|group| DuplicateListing {
                    title: group[0].title(),
                    notes: group,
                })
                .collect();
            Output::new(listings).print_json()?;
        }
    }

    Ok(())
}

pub fn handle_links(args: &LinksArgs, store_path: &Path) -> Result<()> {
    let store = open_store(store_path)?;

    if args.all {
        let notes = store
            .notes_with_links()
            .context("failed to find notes with links")?;
        match args.format {
            OutputFormat::Human => {
                if notes.is_empty() {
                    println!("No notes with links found.");
                } else {
                    print_note_table(&notes, true, false);
                    println!();
                    println!("{} note(s) with links", notes.len());
                }
            }
            OutputFormat::Json => Output::new(&notes).print_json()?,
        }
        return Ok(());
    }

    let input = args
        .note
        .as_deref()
        .context("a note ID or title is required unless --all is used")?;
    let identifier = NoteIdentifier::parse(input.trim(), args.by_title);
    let NoteLinks { note, links } = views::extract_links(&store, &identifier)?;

    match args.format {
        OutputFormat::Human => {
            if links.is_empty() {
                println!("No links found in '{}'.", note.title());
            } else {
                println!("Links in '{}':", note.title());
                for (i, link) in links.iter().enumerate() {
                    println!("{}. {}", i + 1, link);
                }
            }
        }
        OutputFormat::Json => Output::new(LinkListing {
            id: note.id().to_string(),
            title: note.title(),
            links,
        })
        .print_json()?,
    }

    Ok(())
}
