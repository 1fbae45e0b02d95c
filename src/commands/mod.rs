//! CLI command implementations.

pub mod update;
