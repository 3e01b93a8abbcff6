//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Note;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// File format for the `export` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    /// Plain text, one block per note
    Txt,
}

impl ExportFormat {
    /// File extension used for the default output path.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Txt => "txt",
        }
    }
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Prints the wrapped data as pretty JSON on stdout.
    pub fn print_json(&self) -> serde_json::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// A group of notes sharing one title.
#[derive(Debug, Serialize)]
pub struct DuplicateListing<'a> {
    pub title: &'a str,
    pub notes: &'a [Note],
}

/// The links found in one note.
#[derive(Debug, Serialize)]
pub struct LinkListing<'a> {
    pub id: String,
    pub title: &'a str,
    pub links: Vec<String>,
}
