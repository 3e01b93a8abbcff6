//! CLI command definitions and handlers

pub mod config;
pub mod date_filter;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::{ExportFormat, OutputFormat};

/// apple-notes - read and manage Apple Notes from the command line
#[derive(Parser, Debug)]
#[command(name = "apple-notes", version, about, long_about = None)]
pub struct Cli {
    /// Path to NoteStore.sqlite (overrides config file)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes, newest first
    List(ListArgs),

    /// Search note titles and snippets
    Search(SearchArgs),

    /// Show a note with its full body
    Show(ShowArgs),

    /// List folders with note counts
    Folders(FoldersArgs),

    /// Show recently modified notes
    Recent(RecentArgs),

    /// Show collection statistics
    Stats(StatsArgs),

    /// Find notes that share a title
    Duplicates(DuplicatesArgs),

    /// Extract URLs from a note, or list notes containing URLs
    Links(LinksArgs),

    /// List, search, and add hashtags
    Tags(TagsArgs),

    /// Create a new note
    Add(AddArgs),

    /// Replace a note's title and/or body
    Edit(EditArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Move a note to another folder
    Move(MoveArgs),

    /// Append content to a note
    Append(AppendArgs),

    /// Move every note from one folder to another
    BulkMove(BulkMoveArgs),

    /// Move notes not modified for a while to an archive folder
    Archive(ArchiveArgs),

    /// Export notes to a file
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only notes in this folder
    #[arg(short, long)]
    pub folder: Option<String>,

    /// Show at most this many notes
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Hide note IDs
    #[arg(long)]
    pub hide_id: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for in titles and snippets
    pub term: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID or title
    pub note: String,

    /// Treat the argument as a title even if it is numeric
    #[arg(short = 't', long)]
    pub by_title: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `folders` command
#[derive(Parser, Debug)]
pub struct FoldersArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `recent` command
#[derive(Parser, Debug)]
pub struct RecentArgs {
    /// Notes modified in the last day
    #[arg(long, conflicts_with_all = ["week", "days"])]
    pub today: bool,

    /// Notes modified in the last seven days
    #[arg(long, conflicts_with = "days")]
    pub week: bool,

    /// Notes modified in the last N days
    #[arg(long)]
    pub days: Option<u32>,

    /// Show at most this many notes
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `stats` command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `duplicates` command
#[derive(Parser, Debug)]
pub struct DuplicatesArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `links` command
#[derive(Parser, Debug)]
pub struct LinksArgs {
    /// Note ID or title. Required unless --all is used.
    #[arg(required_unless_present = "all")]
    pub note: Option<String>,

    /// List every note containing a URL
    #[arg(short, long, conflicts_with = "note")]
    pub all: bool,

    /// Treat the argument as a title even if it is numeric
    #[arg(short = 't', long)]
    pub by_title: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    #[command(subcommand)]
    pub command: TagsCommand,
}

#[derive(Subcommand, Debug)]
pub enum TagsCommand {
    /// List hashtags with occurrence counts
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Find notes carrying a hashtag
    Search {
        /// Tag, with or without the leading '#'
        tag: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Append a hashtag to a note
    Add {
        /// Note ID or title
        note: String,

        /// Tag, with or without the leading '#'
        tag: String,

        /// Treat the note argument as a title even if it is numeric
        #[arg(short = 't', long)]
        by_title: bool,
    },
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note title
    pub title: String,

    /// Note body (read from stdin if not given)
    #[arg(short, long)]
    pub body: Option<String>,

    /// Folder to create the note in (defaults to the configured folder)
    #[arg(short, long)]
    pub folder: Option<String>,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID or title
    pub note: String,

    /// New title (keeps the current title if not given)
    #[arg(long)]
    pub title: Option<String>,

    /// New body (read from stdin if not given)
    #[arg(short, long)]
    pub body: Option<String>,

    /// Treat the note argument as a title even if it is numeric
    #[arg(short = 't', long)]
    pub by_title: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Edit even if the note has attachments or rich content, which will be lost
    #[arg(long)]
    pub force_unsafe: bool,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note ID or title
    pub note: String,

    /// Treat the argument as a title even if it is numeric
    #[arg(short = 't', long)]
    pub by_title: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `move` command
#[derive(Parser, Debug)]
pub struct MoveArgs {
    /// Note ID or title
    pub note: String,

    /// Destination folder
    pub folder: String,

    /// Treat the note argument as a title even if it is numeric
    #[arg(short = 't', long)]
    pub by_title: bool,
}

/// Arguments for the `append` command
#[derive(Parser, Debug)]
pub struct AppendArgs {
    /// Note ID or title
    pub note: String,

    /// Content to append (read from stdin if not given)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Treat the note argument as a title even if it is numeric
    #[arg(short = 't', long)]
    pub by_title: bool,
}

/// Arguments for the `bulk-move` command
#[derive(Parser, Debug)]
pub struct BulkMoveArgs {
    /// Source folder
    #[arg(long)]
    pub from: String,

    /// Destination folder
    #[arg(long)]
    pub to: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `archive` command
#[derive(Parser, Debug)]
pub struct ArchiveArgs {
    /// Only archive notes from this folder
    #[arg(short, long)]
    pub folder: Option<String>,

    /// Age threshold: "6m", "30d", "2w", "1y", or a YYYY-MM-DD date
    #[arg(short, long, default_value = "6m")]
    pub older_than: String,

    /// Archive folder (defaults to the configured folder)
    #[arg(long)]
    pub to: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Only export notes from this folder
    #[arg(short, long)]
    pub folder: Option<String>,

    /// File format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Output path (defaults to apple-notes-export.<ext> on the desktop)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
