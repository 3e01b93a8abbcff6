//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::automation::DEFAULT_PROGRAM;
use crate::domain::DEFAULT_FOLDER;
use crate::store::NoteStore;

/// Application configuration loaded from config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location of the notes database
    pub store_path: Option<PathBuf>,

    /// Folder new notes are created in
    pub default_folder: String,

    /// Folder the `archive` command moves notes to
    pub archive_folder: String,

    /// Window used by `recent` when no period is given
    pub recent_days: u32,

    /// Row limit used by `recent` when no limit is given
    pub recent_limit: usize,

    /// Program used to run automation scripts
    pub osascript: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            default_folder: DEFAULT_FOLDER.to_string(),
            archive_folder: "Archive".to_string(),
            recent_days: 30,
            recent_limit: 20,
            osascript: DEFAULT_PROGRAM.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `config_path`, or defaults if it doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/apple-notes/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("apple-notes")
            .join("config.toml")
    }

    /// Resolve the notes database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--store` argument
    /// 2. Config file `store_path` setting
    /// 3. The well-known location under the home directory
    pub fn store_path(&self, cli_store: Option<&PathBuf>) -> Result<PathBuf> {
        if let Some(path) = cli_store.or(self.store_path.as_ref()) {
            return Ok(path.clone());
        }
        NoteStore::default_path().context("failed to locate the notes database")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert!(config.store_path.is_none());
        assert_eq!(config.default_folder, "Notes");
        assert_eq!(config.archive_folder, "Archive");
        assert_eq!(config.recent_days, 30);
        assert_eq!(config.recent_limit, 20);
        assert_eq!(config.osascript, "osascript");
    }

    #[test]
    fn store_path_prefers_cli_arg() {
        let config = Config {
            store_path: Some(PathBuf::from("/config/NoteStore.sqlite")),
            ..Config::default()
        };
        let cli_store = PathBuf::from("/cli/NoteStore.sqlite");
        assert_eq!(
            config.store_path(Some(&cli_store)).unwrap(),
            PathBuf::from("/cli/NoteStore.sqlite")
        );
    }

    #[test]
    fn store_path_falls_back_to_config() {
        let config = Config {
            store_path: Some(PathBuf::from("/config/NoteStore.sqlite")),
            ..Config::default()
        };
        assert_eq!(
            config.store_path(None).unwrap(),
            PathBuf::from("/config/NoteStore.sqlite")
        );
    }

    #[test]
    fn store_path_falls_back_to_well_known_location() {
        let path = Config::default().store_path(None).unwrap();
        assert!(path.ends_with("group.com.apple.notes/NoteStore.sqlite"));
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("apple-notes/config.toml"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "archive_folder = \"Old\"\nrecent_days = 7\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.archive_folder, "Old");
        assert_eq!(config.recent_days, 7);
        assert_eq!(config.default_folder, "Notes");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "recent_days = \"soon\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config file"));
    }
}
