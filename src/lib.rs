//! apple-notes - read and manage Apple Notes from the command line

pub mod automation;
pub mod cli;
pub mod domain;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::LevelFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_append, handle_archive, handle_bulk_move, handle_delete,
        handle_duplicates, handle_edit, handle_export, handle_folders, handle_links, handle_list,
        handle_move, handle_recent, handle_search, handle_show, handle_stats, handle_tags,
    },
};

/// Maps the `-v` count to a log level; warnings are always shown.
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Starts logging to stderr. `RUST_LOG`, when set, takes precedence.
fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level(verbose));
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    let _ = builder.format_timestamp(None).try_init();
}

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(args.shell, &mut cmd, "apple-notes", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    // Resolved per command; add and bulk-move never read the store.
    let store = || config.store_path(cli.store.as_ref());

    match &cli.command {
        Command::List(args) => handle_list(args, &store()?),
        Command::Search(args) => handle_search(args, &store()?),
        Command::Show(args) => handle_show(args, &store()?, &config),
        Command::Folders(args) => handle_folders(args, &store()?),
        Command::Recent(args) => handle_recent(args, &store()?, &config),
        Command::Stats(args) => handle_stats(args, &store()?),
        Command::Duplicates(args) => handle_duplicates(args, &store()?),
        Command::Links(args) => handle_links(args, &store()?),
        Command::Tags(args) => handle_tags(args, &store()?, &config),
        Command::Add(args) => handle_add(args, &config),
        Command::Edit(args) => handle_edit(args, &store()?, &config),
        Command::Delete(args) => handle_delete(args, &store()?, &config),
        Command::Move(args) => handle_move(args, &store()?, &config),
        Command::Append(args) => handle_append(args, &store()?, &config),
        Command::BulkMove(args) => handle_bulk_move(args, &config),
        Command::Archive(args) => handle_archive(args, &store()?, &config),
        Command::Export(args) => handle_export(args, &store()?),
        Command::Completions(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(3), LevelFilter::Trace);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }
}
