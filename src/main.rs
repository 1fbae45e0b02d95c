//! allowlist-filter - remove entries from a plain-text IP allowlist.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io::Write;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use allowlist_filter::commands::update::{self, UpdateRequest};
use allowlist_filter::fs_abstraction::real_fs;
use allowlist_filter::{AllowlistError, Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    // stdout carries the updated list
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };

    let request = UpdateRequest::resolve(&cli, &config);

    match update::run(real_fs(), request) {
        Ok(updated) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(updated.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        Err(e @ AllowlistError::NothingToRemove) => Cli::command()
            .error(ErrorKind::MissingRequiredArgument, e)
            .exit(),
        Err(e) => Err(e.into()),
    }
}
