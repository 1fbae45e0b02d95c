//! Demo allowlist bootstrapping.

use std::path::Path;
use tracing::info;

use crate::error::AllowlistError;
use crate::fs_abstraction::FileSystem;

/// Entries written to a freshly created demo allowlist.
pub const DEMO_ENTRIES: [&str; 5] = [
    "192.168.25.60",
    "192.168.1.10",
    "192.168.140.81",
    "10.0.0.5",
    "192.168.203.198",
];

/// Entries removed in demo mode when none are given.
pub const DEMO_REMOVALS: [&str; 3] = ["192.168.25.60", "192.168.140.81", "192.168.203.198"];

/// Demo allowlist file content, one entry per line.
pub fn demo_content() -> String {
    crate::filter::render(&DEMO_ENTRIES)
}

/// Create the demo allowlist at `path` unless something is already there.
///
/// Returns true if the file was created.
pub fn ensure_demo_file<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
) -> Result<bool, AllowlistError> {
    if fs.exists(path) {
        return Ok(false);
    }

    fs.write(path, demo_content().as_bytes())
        .map_err(|e| AllowlistError::Output {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!("Created demo allowlist {}", path.display());
    Ok(true)
}
