//! Hashtag handlers.

use anyhow::{Context, Result};
use std::path::Path;

use super::resolve::{resolve_note, shared_title_warning};
use super::{open_store, print_note_table};
use crate::automation::{AutomationExecutor, OsascriptExecutor};
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::{TagsArgs, TagsCommand};
use crate::domain::{Note, Tag};
use crate::store::NoteRepository;
use crate::store::views;

pub fn handle_tags(args: &TagsArgs, store_path: &Path, config: &Config) -> Result<()> {
    let store = open_store(store_path)?;

    match &args.command {
        TagsCommand::List { format } => {
            let tags = views::tag_index(&store).context("failed to build tag index")?;
            match format {
                OutputFormat::Human => {
                    if tags.is_empty() {
                        println!("No tags found.");
                    } else {
                        println!("{:<30}  {:>5}", "Tag", "Count");
                        for tag in &tags {
                            println!("{:<30}  {:>5}", tag.name(), tag.count());
                        }
                        println!();
                        println!("{} tag(s)", tags.len());
                    }
                }
                OutputFormat::Json => Output::new(&tags).print_json()?,
            }
        }
        TagsCommand::Search { tag, format } => {
            let tag = Tag::new(tag).with_context(|| format!("invalid tag: {}", tag))?;
            let notes = views::search_by_tag(&store, &tag)
                .with_context(|| format!("failed to search for tag {}", tag))?;
            match format {
                OutputFormat::Human => {
                    if notes.is_empty() {
                        println!("No notes tagged {}.", tag);
                    } else {
                        print_note_table(&notes, true, false);
                        println!();
                        println!("{} note(s) tagged {}", notes.len(), tag);
                    }
                }
                OutputFormat::Json => Output::new(&notes).print_json()?,
            }
        }
        TagsCommand::Add {
            note,
            tag,
            by_title,
        } => {
            let executor = OsascriptExecutor::new(&config.osascript);
            let note = add_tag(&store, &executor, note, tag, *by_title)?;
            println!("Tagged '{}' [{}]", note.title(), note.id());
        }
    }

    Ok(())
}

/// Appends a hashtag to the resolved note.
pub(crate) fn add_tag<R, E>(
    repo: &R,
    executor: &E,
    input: &str,
    tag: &str,
    by_title: bool,
) -> Result<Note>
where
    R: NoteRepository + ?Sized,
    E: AutomationExecutor + ?Sized,
{
    let tag = Tag::new(tag).with_context(|| format!("invalid tag: {}", tag))?;
    let note = resolve_note(repo, input, by_title)?;
    if let Some(warning) = shared_title_warning(repo, &note) {
        eprintln!("{}", warning);
    }

    executor
        .add_tag(note.title(), &tag)
        .with_context(|| format!("failed to tag '{}'", note.title()))?;
    Ok(note)
}
