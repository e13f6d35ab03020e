//! Command-line interface for song-catalog.
//!
//! Runs the HTTP server by default; `list` prints catalog entries without
//! starting it.

mod commands;

pub use commands::{Cli, Commands, resolve_config, run_command};
