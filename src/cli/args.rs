//! CLI argument definitions using clap
//!
//! Commands:
//! - notesd init [--config <path>]
//! - notesd serve [--config <path>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// notesd - A minimal notes HTTP API
#[derive(Parser, Debug)]
#[command(name = "notesd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database and the notes table, then exit
    Init {
        /// Path to configuration file (default: ./notesd.json if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file (default: ./notesd.json if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding config and environment
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
