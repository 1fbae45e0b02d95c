//! Configuration file parsing and validation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Allowlist path used when neither the CLI nor the config names one.
pub const DEFAULT_INPUT: &str = "allow_list.txt";

/// How the filtered list is written to its destination.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Truncate and overwrite the destination in place
    #[default]
    Direct,
    /// Write a temporary sibling, sync it, then rename over the destination
    Atomic,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Allowlist file to read
    pub input: PathBuf,

    /// Destination file (None = overwrite input)
    pub output: Option<PathBuf>,

    /// Entries removed when none are given on the command line
    pub remove: Vec<String>,

    pub write_mode: WriteMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: None,
            remove: Vec::new(),
            write_mode: WriteMode::Direct,
        }
    }
}

impl Config {
    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            anyhow::bail!("Invalid input: path must not be empty");
        }

        if let Some(ref output) = self.output {
            if output.as_os_str().is_empty() {
                anyhow::bail!("Invalid output: path must not be empty (omit it to update in place)");
            }
        }

        Ok(())
    }
}
