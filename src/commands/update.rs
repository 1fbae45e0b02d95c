//! Update command implementation.

use std::path::PathBuf;
use tracing::debug;

use crate::cli::Cli;
use crate::config::{Config, WriteMode};
use crate::demo::{ensure_demo_file, DEMO_REMOVALS};
use crate::error::AllowlistError;
use crate::filter;
use crate::fs_abstraction::FileSystem;

/// Everything needed for one update, after CLI and config are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub remove: Vec<String>,
    pub write_mode: WriteMode,
    pub demo: bool,
}

impl UpdateRequest {
    /// Merge CLI flags over config values. CLI wins where both are set.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let remove = if cli.remove.is_empty() {
            config.remove.clone()
        } else {
            cli.remove.clone()
        };

        let write_mode = if cli.atomic {
            WriteMode::Atomic
        } else {
            config.write_mode
        };

        Self {
            input: cli.input.clone().unwrap_or_else(|| config.input.clone()),
            output: cli.output.clone().or_else(|| config.output.clone()),
            remove,
            write_mode,
            demo: cli.demo,
        }
    }
}

/// Run the update and return the text written to the destination.
pub fn run<F: FileSystem + ?Sized>(
    fs: &F,
    mut request: UpdateRequest,
) -> Result<String, AllowlistError> {
    if request.demo {
        ensure_demo_file(fs, &request.input)?;
        if request.remove.is_empty() {
            debug!("No --remove given, using demo removal list");
            request.remove = DEMO_REMOVALS.iter().map(|s| s.to_string()).collect();
        }
    }

    if request.remove.is_empty() {
        return Err(AllowlistError::NothingToRemove);
    }

    filter::update(
        fs,
        &request.input,
        &request.remove,
        request.output.as_deref(),
        request.write_mode,
    )
}
