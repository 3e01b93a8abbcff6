//! AppleScript executor backed by the `osascript` program.

use super::{AutomationError, AutomationExecutor, AutomationResult};
use crate::domain::Tag;
use log::{debug, warn};
use std::process::Command;

/// Default program used to run scripts.
pub const DEFAULT_PROGRAM: &str = "osascript";

// Every script reads user text from `argv`; nothing is spliced into the source.

const CREATE_NOTE: &str = r#"on run argv
    tell application "Notes"
        tell folder (item 3 of argv)
            make new note with properties {name:(item 1 of argv), body:(item 2 of argv)}
        end tell
    end tell
end run"#;

const EDIT_NOTE: &str = r#"on run argv
    tell application "Notes"
        set theNote to first note whose name is (item 1 of argv)
        set body of theNote to (item 3 of argv)
        set name of theNote to (item 2 of argv)
    end tell
end run"#;

const DELETE_NOTE: &str = r#"on run argv
    tell application "Notes"
        delete (first note whose name is (item 1 of argv))
    end tell
end run"#;

const MOVE_NOTE: &str = r#"on run argv
    tell application "Notes"
        set theNote to first note whose name is (item 1 of argv)
        move theNote to folder (item 2 of argv)
    end tell
end run"#;

const APPEND_NOTE: &str = r#"on run argv
    tell application "Notes"
        set theNote to first note whose name is (item 1 of argv)
        set body of theNote to (body of theNote & linefeed & (item 2 of argv))
    end tell
end run"#;

const ADD_TAG: &str = r#"on run argv
    tell application "Notes"
        set theNote to first note whose name is (item 1 of argv)
        set body of theNote to (body of theNote & " " & (item 2 of argv))
    end tell
end run"#;

const BULK_MOVE: &str = r#"on run argv
    tell application "Notes"
        set movedCount to 0
        set sourceNotes to notes of folder (item 1 of argv)
        repeat with n in sourceNotes
            move n to folder (item 2 of argv)
            set movedCount to movedCount + 1
        end repeat
        return movedCount
    end tell
end run"#;

const LIST_FOLDERS: &str = r#"on run argv
    tell application "Notes"
        set output to ""
        repeat with f in folders
            set output to output & (name of f) & linefeed
        end repeat
        return output
    end tell
end run"#;

const NOTE_BODY: &str = r#"on run argv
    tell application "Notes"
        return plaintext of (first note whose name is (item 1 of argv))
    end tell
end run"#;

const CREATE_FOLDER: &str = r#"on run argv
    tell application "Notes"
        make new folder with properties {name:(item 1 of argv)}
    end tell
end run"#;

/// Runs AppleScript through an external program.
#[derive(Debug, Clone)]
pub struct OsascriptExecutor {
    program: String,
}

impl Default for OsascriptExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl OsascriptExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Builds the command line: the script as one `-e` statement followed by
    /// its arguments.
    pub(crate) fn command(&self, script: &str, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-e").arg(script).args(args);
        cmd
    }

    /// Runs a script and returns its trimmed standard output.
    fn run(&self, operation: &'static str, script: &str, args: &[&str]) -> AutomationResult<String> {
        debug!("running {} via {}", operation, self.program);

        let output = self
            .command(script, args)
            .output()
            .map_err(|source| AutomationError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let message = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("{} failed: {}", operation, message);
            return Err(AutomationError::Script {
                operation,
                status: output.status,
                message,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl AutomationExecutor for OsascriptExecutor {
    fn create_note(&self, title: &str, body: &str, folder: &str) -> AutomationResult<()> {
        self.run("create note", CREATE_NOTE, &[title, body, folder])
            .map(drop)
    }

    fn edit_note(&self, title: &str, new_title: &str, new_body: &str) -> AutomationResult<()> {
        self.run("edit note", EDIT_NOTE, &[title, new_title, new_body])
            .map(drop)
    }

    fn delete_note(&self, title: &str) -> AutomationResult<()> {
        self.run("delete note", DELETE_NOTE, &[title]).map(drop)
    }

    fn move_note(&self, title: &str, folder: &str) -> AutomationResult<()> {
        self.run("move note", MOVE_NOTE, &[title, folder]).map(drop)
    }

    fn append_note(&self, title: &str, content: &str) -> AutomationResult<()> {
        self.run("append note", APPEND_NOTE, &[title, content])
            .map(drop)
    }

    fn add_tag(&self, title: &str, tag: &Tag) -> AutomationResult<()> {
        self.run("add tag", ADD_TAG, &[title, tag.as_str()])
            .map(drop)
    }

    fn bulk_move(&self, source: &str, target: &str) -> AutomationResult<usize> {
        let output = self.run("bulk move", BULK_MOVE, &[source, target])?;
        parse_count("bulk move", &output)
    }

    fn list_folder_names(&self) -> AutomationResult<Vec<String>> {
        let output = self.run("list folders", LIST_FOLDERS, &[])?;
        Ok(parse_folder_names(&output))
    }

    fn note_body(&self, title: &str) -> AutomationResult<String> {
        self.run("read note body", NOTE_BODY, &[title])
    }

    fn create_folder(&self, name: &str) -> AutomationResult<()> {
        self.run("create folder", CREATE_FOLDER, &[name]).map(drop)
    }
}

/// Splits newline-delimited folder names, dropping blank lines.
pub(crate) fn parse_folder_names(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn parse_count(operation: &'static str, output: &str) -> AutomationResult<usize> {
    output
        .trim()
        .parse()
        .map_err(|_| AutomationError::UnexpectedOutput {
            operation,
            output: output.to_string(),
        })
}
