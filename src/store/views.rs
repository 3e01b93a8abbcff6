//! Derived views built on top of a [`NoteRepository`].
//!
//! These functions only combine repository results; they hold no state and
//! work with any implementation of the trait.

use crate::domain::{Note, NoteIdentifier, Tag, extract_hashtags, extract_urls};
use crate::store::{NoteRepository, NoteStore, StoreResult, StoreSummary, TagWithCount};
use log::warn;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Number of tags reported by [`stats`].
pub const TOP_TAGS: usize = 10;

/// Collection statistics.
///
/// `top_tags` is the only part allowed to fail on its own. When it does, the
/// list is empty and `tags_error` explains why; every other field is complete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    #[serde(flatten)]
    pub summary: StoreSummary,
    pub top_tags: Vec<TagWithCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_error: Option<String>,
}

/// Groups live notes sharing an exact title, keeping only groups of two or more.
///
/// Groups are ordered by title; members keep the repository's newest-first order.
pub fn find_duplicates<R: NoteRepository + ?Sized>(repo: &R) -> StoreResult<Vec<Vec<Note>>> {
    let mut by_title: BTreeMap<String, Vec<Note>> = BTreeMap::new();
    for note in repo.list_notes(None)? {
        by_title.entry(note.title().to_string()).or_default().push(note);
    }

    Ok(by_title
        .into_values()
        .filter(|group| group.len() > 1)
        .collect())
}

/// Counts hashtag occurrences; most frequent first, ties by name.
pub fn count_tags<I, S>(snippets: I) -> Vec<TagWithCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for snippet in snippets {
        for tag in extract_hashtags(snippet.as_ref()) {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<TagWithCount> = counts
        .into_iter()
        .map(|(name, count)| TagWithCount::new(name, count))
        .collect();
    tags.sort_by(|a, b| b.count().cmp(&a.count()).then_with(|| a.name().cmp(b.name())));
    tags
}

/// Builds the tag index over every live snippet.
pub fn tag_index<R: NoteRepository + ?Sized>(repo: &R) -> StoreResult<Vec<TagWithCount>> {
    Ok(count_tags(repo.live_snippets()?))
}

/// Finds notes carrying `tag` as a whole hashtag token.
pub fn search_by_tag<R: NoteRepository + ?Sized>(repo: &R, tag: &Tag) -> StoreResult<Vec<Note>> {
    repo.search_by_hashtag(tag)
}

/// Computes collection statistics, tolerating a failed tag index.
pub fn stats<R: NoteRepository + ?Sized>(repo: &R) -> StoreResult<Stats> {
    let summary = repo.summary()?;

    let (top_tags, tags_error) = match tag_index(repo) {
        Ok(mut tags) => {
            tags.truncate(TOP_TAGS);
            (tags, None)
        }
        Err(e) => {
            warn!("tag statistics unavailable: {}", e);
            (Vec::new(), Some(e.to_string()))
        }
    };

    Ok(Stats {
        summary,
        top_tags,
        tags_error,
    })
}

/// One note and the URLs found in its snippet, in order of appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteLinks {
    pub note: Note,
    pub links: Vec<String>,
}

/// Extracts the URLs in one note's snippet.
pub fn extract_links<R: NoteRepository + ?Sized>(
    repo: &R,
    identifier: &NoteIdentifier,
) -> StoreResult<NoteLinks> {
    let note = repo.get_note(identifier)?;
    let links = extract_urls(note.snippet());
    Ok(NoteLinks { note, links })
}

impl NoteStore {
    /// Computes [`stats`] inside one read snapshot so all counts agree.
    pub fn stats(&self) -> StoreResult<Stats> {
        let snapshot = self.snapshot()?;
        let stats = stats(self)?;
        snapshot.finish()?;
        Ok(stats)
    }
}
