//! # allowlist-filter
//!
//! Maintains a plain-text allowlist of network addresses by removing a
//! caller-specified set of entries and writing the remainder back.
//!
//! The allowlist is read as whitespace-separated tokens and rewritten one
//! entry per line. Entries are never validated, normalized or deduplicated.
//!
//! ## Example Usage
//!
//! ```no_run
//! use allowlist_filter::filter::update_allowlist;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let updated = update_allowlist(
//!         Path::new("allow_list.txt"),
//!         &["192.168.25.60", "192.168.140.81"],
//!         None,
//!     )?;
//!     print!("{}", updated);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definition
//! - [`commands`] - CLI command implementation
//! - [`config`] - Configuration parsing and validation
//! - [`demo`] - Demo allowlist bootstrapping
//! - [`error`] - Error types
//! - [`filter`] - Tokenize, filter and rewrite an allowlist
//! - [`fs_abstraction`] - Filesystem trait for dependency injection

pub mod cli;
pub mod commands;
pub mod config;
pub mod demo;
pub mod error;
pub mod filter;
pub mod fs_abstraction;

pub use cli::Cli;
pub use config::{Config, WriteMode};
pub use error::AllowlistError;
