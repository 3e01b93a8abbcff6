//! Export command handler.

use anyhow::{Context, Result};
use minijinja::{Environment, context};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::{format_timestamp, open_store};
use crate::cli::ExportArgs;
use crate::cli::output::ExportFormat;
use crate::domain::Note;
use crate::store::NoteRepository;

/// Plain-text export layout, one block per note.
pub const TXT_TEMPLATE: &str = "{% for note in notes %}Title: {{ note.title }}
Folder: {{ note.folder }}
Modified: {{ note.modified }}

{{ note.snippet }}

{{ separator }}

{% endfor %}";

const SEPARATOR_WIDTH: usize = 80;

#[derive(Serialize)]
struct TxtNote<'a> {
    title: &'a str,
    folder: &'a str,
    modified: String,
    snippet: &'a str,
}

pub fn handle_export(args: &ExportArgs, store_path: &Path) -> Result<()> {
    let store = open_store(store_path)?;
    let notes = store
        .list_notes(args.folder.as_deref())
        .context("failed to list notes")?;

    if notes.is_empty() {
        println!("No notes to export.");
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(args.format));
    let content = render_export(&notes, args.format)?;
    write_atomic(&output, &content)?;

    println!("Exported {} note(s) to {}", notes.len(), output.display());
    Ok(())
}

/// Serializes notes in the requested format.
pub(crate) fn render_export(notes: &[Note], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(notes).context("failed to serialize notes as JSON")
        }
        ExportFormat::Yaml => {
            serde_yaml::to_string(notes).context("failed to serialize notes as YAML")
        }
        ExportFormat::Txt => render_txt(notes),
    }
}

fn render_txt(notes: &[Note]) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("export.txt", TXT_TEMPLATE)?;
    let tmpl = env.get_template("export.txt")?;

    let notes: Vec<TxtNote> = notes
        .iter()
        .map(|note| TxtNote {
            title: note.title(),
            folder: note.folder(),
            modified: format_timestamp(note.modified(), "%Y-%m-%d %H:%M:%S"),
            snippet: note.snippet(),
        })
        .collect();

    let text = tmpl.render(context! {
        notes => notes,
        separator => "-".repeat(SEPARATOR_WIDTH),
    })?;
    Ok(text)
}

/// `apple-notes-export.<ext>` on the desktop, falling back to the home directory.
pub(crate) fn default_output_path(format: ExportFormat) -> PathBuf {
    dirs::desktop_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(format!("apple-notes-export.{}", format.extension()))
}

/// Writes `content` to `path` through a temporary file in the same directory.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to create temporary file in {}", parent.display()))?;
    temp.write_all(content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
