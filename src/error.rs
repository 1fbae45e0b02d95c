//! Error types for allowlist-filter.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AllowlistError {
    #[error("Failed to read allowlist {}: {}", .path.display(), .source)]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Nothing to remove. Provide at least one --remove IP or use --demo.")]
    NothingToRemove,

    #[error("Failed to write allowlist {}: {}", .path.display(), .source)]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AllowlistError {
    /// Missing or unreadable source, or nothing to remove.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input { .. } | Self::NothingToRemove)
    }

    /// Destination could not be written.
    pub fn is_output(&self) -> bool {
        matches!(self, Self::Output { .. })
    }
}
