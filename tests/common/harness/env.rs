//! Isolated test environment with a stand-in notes database.

use super::{AppleNotesCommand, TestNote};
use apple_notes::store::schema::{create_schema, insert_attachment, insert_folder};
use rusqlite::Connection;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Folder primary keys start here so they never collide with note keys in tests.
const FIRST_FOLDER_PK: i64 = 1000;

/// Isolated test environment.
///
/// Owns a temporary home directory containing an empty notes database.
/// Commands run with `HOME` and the config directory pointed inside it, so
/// the user's real configuration is never read.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    home: PathBuf,
    store_path: PathBuf,
    folders: RefCell<HashMap<String, i64>>,
}

impl TestEnv {
    /// Creates a new environment with an empty notes database.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let home = temp_dir.path().to_path_buf();
        let store_path = home.join("NoteStore.sqlite");

        let conn = Connection::open(&store_path).expect("Failed to create store");
        create_schema(&conn).expect("Failed to create schema");

        Self {
            _temp_dir: temp_dir,
            home,
            store_path,
            folders: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the path to the stand-in notes database.
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Returns the temporary home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    fn connect(&self) -> Connection {
        Connection::open(&self.store_path).expect("Failed to open store for writing")
    }

    /// Creates the named folder if needed and returns its primary key.
    pub fn folder(&self, name: &str) -> i64 {
        let mut folders = self.folders.borrow_mut();
        if let Some(pk) = folders.get(name) {
            return *pk;
        }

        let pk = FIRST_FOLDER_PK + folders.len() as i64;
        insert_folder(&self.connect(), pk, name).expect("Failed to insert folder");
        folders.insert(name.to_string(), pk);
        pk
    }

    /// Adds a test note to the database.
    pub fn add_note(&self, note: &TestNote) {
        let folder_pk = note.folder_name().map(|name| self.folder(name));
        note.to_row(folder_pk)
            .insert(&self.connect())
            .expect("Failed to insert note");
    }

    /// Attaches an image to the note with primary key `note_pk`.
    pub fn add_attachment(&self, pk: i64, note_pk: i64) {
        insert_attachment(&self.connect(), pk, note_pk, "public.jpeg")
            .expect("Failed to insert attachment");
    }

    /// Adds several notes.
    pub fn add_notes(&self, notes: &[TestNote]) {
        for note in notes {
            self.add_note(note);
        }
    }

    /// Returns where the config file is looked up for this environment.
    pub fn config_paths(&self) -> Vec<PathBuf> {
        vec![
            self.home.join(".config").join("apple-notes").join("config.toml"),
            self.home
                .join("Library")
                .join("Application Support")
                .join("apple-notes")
                .join("config.toml"),
        ]
    }

    /// Writes the config file for this environment.
    pub fn write_config(&self, contents: &str) {
        for path in self.config_paths() {
            std::fs::create_dir_all(path.parent().expect("config path has a parent"))
                .expect("Failed to create config directory");
            std::fs::write(&path, contents).expect("Failed to write config");
        }
    }

    /// Points automation at `program` via the config file.
    pub fn use_automation_program(&self, program: &str) {
        self.write_config(&format!("osascript = {:?}\n", program));
    }

    /// Creates a command configured for this environment.
    pub fn cmd(&self) -> AppleNotesCommand {
        AppleNotesCommand::new()
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", &self.home.join(".config"))
            .store(&self.store_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apple_notes::store::{NoteRepository, NoteStore};

    #[test]
    fn test_env_creates_empty_store() {
        let env = TestEnv::new();
        let store = NoteStore::open(env.store_path()).expect("store should open");
        assert!(store.list_notes(None).unwrap().is_empty());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.store_path().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_reuses_folders() {
        let env = TestEnv::new();
        let work = env.folder("Work");
        assert_eq!(env.folder("Work"), work);
        assert_ne!(env.folder("Home"), work);
    }

    #[test]
    fn test_env_added_notes_are_visible() {
        let env = TestEnv::new();
        env.add_notes(&[
            TestNote::new(1, "First").folder("Work"),
            TestNote::new(2, "Second"),
            TestNote::new(3, "Gone").deleted(),
        ]);

        let store = NoteStore::open(env.store_path()).unwrap();
        let notes = store.list_notes(None).unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(store.list_notes(Some("Work")).unwrap()[0].title(), "First");
    }

    #[test]
    fn test_env_attachments_are_not_notes() {
        let env = TestEnv::new();
        env.add_note(&TestNote::new(1, "Photos"));
        env.add_attachment(2, 1);

        let store = NoteStore::open(env.store_path()).unwrap();
        assert_eq!(store.list_notes(None).unwrap().len(), 1);
        assert!(store.has_rich_content(store.list_notes(None).unwrap()[0].id()).unwrap());
    }

    #[test]
    fn test_env_command_targets_store() {
        let env = TestEnv::new();
        let args = env.cmd().get_args().to_vec();
        assert_eq!(args[0], "--store");
        assert_eq!(args[1], env.store_path().to_string_lossy());
    }
}
