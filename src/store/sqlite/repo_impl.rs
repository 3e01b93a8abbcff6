//! NoteRepository trait implementation for NoteStore.

use super::NoteStore;
use super::mapper::{LIVE_NOTE, NEWEST_FIRST, RESOLVED_FOLDER, RawNoteRow, map_note, note_query};
use crate::domain::{Folder, Note, NoteId, NoteIdentifier, Tag};
use crate::store::{
    LargestNote, NoteRepository, SEARCH_LIMIT, StoreError, StoreResult, StoreSummary,
};
use log::debug;
use rusqlite::{OptionalExtension, Params, params};

/// Lower bound, in store seconds, for "within the last ?1 days".
const DAYS_AGO: &str = "(strftime('%s', 'now') - 978307200 - (?1 * 86400))";

const FROM_LIVE: &str = "FROM ZICCLOUDSYNCINGOBJECT AS n
    LEFT JOIN ZICCLOUDSYNCINGOBJECT AS f ON n.ZFOLDER = f.Z_PK";

impl NoteStore {
    /// Runs a note query and maps every row.
    fn query_notes<P: Params>(&self, sql: &str, params: P) -> StoreResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(sql)?;
        let notes = stmt
            .query_map(params, map_note)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(notes)
    }

    /// Runs a single-value count query.
    fn count<P: Params>(&self, sql: &str, params: P) -> StoreResult<usize> {
        let count: i64 = self.conn.query_row(sql, params, |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    fn largest_note(&self) -> StoreResult<Option<LargestNote>> {
        let sql = note_query(
            "AND n.ZSNIPPET IS NOT NULL",
            "ORDER BY LENGTH(n.ZSNIPPET) DESC, n.Z_PK ASC LIMIT 1",
        );
        let largest = self
            .conn
            .query_row(&sql, [], |row| RawNoteRow::from_row(row))
            .optional()?
            .map(|raw| {
                let note = raw.into_note();
                let chars = note.snippet().chars().count();
                LargestNote { note, chars }
            });
        Ok(largest)
    }
}

impl NoteRepository for NoteStore {
    fn list_notes(&self, folder: Option<&str>) -> StoreResult<Vec<Note>> {
        let notes = match folder {
            Some(folder) => {
                let sql = note_query(&format!("AND {RESOLVED_FOLDER} = ?1"), NEWEST_FIRST);
                self.query_notes(&sql, [folder])?
            }
            None => self.query_notes(&note_query("", NEWEST_FIRST), [])?,
        };
        debug!("list_notes({:?}) returned {} notes", folder, notes.len());
        Ok(notes)
    }

    fn search_notes(&self, term: &str) -> StoreResult<Vec<Note>> {
        let sql = note_query(
            "AND (n.ZTITLE1 LIKE ?1 OR n.ZSNIPPET LIKE ?1)",
            &format!("{NEWEST_FIRST} LIMIT ?2"),
        );
        let pattern = format!("%{}%", term);
        let notes = self.query_notes(&sql, params![pattern, SEARCH_LIMIT as i64])?;
        debug!("search_notes({:?}) returned {} notes", term, notes.len());
        Ok(notes)
    }

    fn search_by_hashtag(&self, tag: &Tag) -> StoreResult<Vec<Note>> {
        let sql = note_query(
            "AND has_hashtag(n.ZSNIPPET, ?1)",
            &format!("{NEWEST_FIRST} LIMIT ?2"),
        );
        let notes = self.query_notes(&sql, params![tag.as_str(), SEARCH_LIMIT as i64])?;
        debug!("search_by_hashtag({}) returned {} notes", tag, notes.len());
        Ok(notes)
    }

    fn get_note(&self, identifier: &NoteIdentifier) -> StoreResult<Note> {
        let found = match identifier {
            NoteIdentifier::ById(id) => {
                let sql = note_query("AND n.Z_PK = ?1", "LIMIT 1");
                self.conn.query_row(&sql, [id.get()], map_note).optional()?
            }
            NoteIdentifier::ByTitle(title) => {
                let sql = note_query("AND n.ZTITLE1 = ?1", &format!("{NEWEST_FIRST} LIMIT 1"));
                self.conn.query_row(&sql, [title], map_note).optional()?
            }
        };

        found.ok_or_else(|| StoreError::NoteNotFound {
            identifier: identifier.to_string(),
        })
    }

    fn count_by_title(&self, title: &str) -> StoreResult<usize> {
        self.count(
            &format!("SELECT COUNT(*) {FROM_LIVE} WHERE {LIVE_NOTE} AND n.ZTITLE1 = ?1"),
            [title],
        )
    }

    fn list_folders(&self) -> StoreResult<Vec<Folder>> {
        let sql = format!(
            "SELECT {RESOLVED_FOLDER} AS folder_name, COUNT(n.Z_PK)
             {FROM_LIVE}
             WHERE {LIVE_NOTE}
             GROUP BY folder_name
             ORDER BY folder_name"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let folders = stmt
            .query_map([], |row| {
                let name: String = row.get(0)?;
                let count: i64 = row.get(1)?;
                Ok(Folder::new(name, usize::try_from(count).unwrap_or(0)))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        debug!("list_folders returned {} folders", folders.len());
        Ok(folders)
    }

    fn recent_notes(&self, days: u32, limit: usize) -> StoreResult<Vec<Note>> {
        let sql = note_query(
            &format!("AND n.ZMODIFICATIONDATE1 > {DAYS_AGO}"),
            &format!("{NEWEST_FIRST} LIMIT ?2"),
        );
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let notes = self.query_notes(&sql, params![days, limit])?;
        debug!("recent_notes({days}, {limit}) returned {} notes", notes.len());
        Ok(notes)
    }

    fn notes_with_links(&self) -> StoreResult<Vec<Note>> {
        let sql = note_query(
            "AND (n.ZSNIPPET LIKE '%http://%' OR n.ZSNIPPET LIKE '%https://%')",
            NEWEST_FIRST,
        );
        let notes = self.query_notes(&sql, [])?;
        debug!("notes_with_links returned {} notes", notes.len());
        Ok(notes)
    }

    fn live_snippets(&self) -> StoreResult<Vec<String>> {
        let sql = format!(
            "SELECT n.ZSNIPPET {FROM_LIVE} WHERE {LIVE_NOTE} AND n.ZSNIPPET IS NOT NULL"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let snippets = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(snippets)
    }

    fn summary(&self) -> StoreResult<StoreSummary> {
        let total_notes = self.count(
            &format!("SELECT COUNT(*) {FROM_LIVE} WHERE {LIVE_NOTE}"),
            [],
        )?;
        let total_folders = self.count(
            &format!("SELECT COUNT(DISTINCT {RESOLVED_FOLDER}) {FROM_LIVE} WHERE {LIVE_NOTE}"),
            [],
        )?;

        let created_within = format!(
            "SELECT COUNT(*) {FROM_LIVE} WHERE {LIVE_NOTE} AND n.ZCREATIONDATE > {DAYS_AGO}"
        );
        let created_last_7_days = self.count(&created_within, [7])?;
        let created_last_30_days = self.count(&created_within, [30])?;

        Ok(StoreSummary {
            total_notes,
            total_folders,
            created_last_7_days,
            created_last_30_days,
            largest_note: self.largest_note()?,
        })
    }

    fn has_rich_content(&self, id: NoteId) -> StoreResult<bool> {
        let attachments = self.count(
            "SELECT COUNT(*) FROM ZICCLOUDSYNCINGOBJECT
             WHERE ZNOTE = ?1 AND COALESCE(ZMARKEDFORDELETION, 0) = 0",
            [id.get()],
        )?;
        debug!("note {id} has {attachments} attachments");
        Ok(attachments > 0)
    }
}
