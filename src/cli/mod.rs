//! CLI module for notesd
//!
//! Provides command-line interface for:
//! - init: Create the database and notes table
//! - serve: Run the HTTP API

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, init_database, run, run_command, serve, Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};
