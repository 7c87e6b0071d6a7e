//! CLI argument definitions using clap
//!
//! Commands:
//! - locman serve [--host <host>] [--port <port>] [--database-url <url>]
//! - locman seed --file <path> [--database-url <url>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// locman - localization management API
#[derive(Parser, Debug)]
#[command(name = "locman")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the localization API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Store URL (falls back to LOCMAN_DATABASE_URL, then a local file)
        #[arg(long)]
        database_url: Option<String>,
    },

    /// Load translation keys and values from a JSON file
    Seed {
        /// Path to the seed file
        #[arg(long)]
        file: PathBuf,

        /// Store URL (falls back to LOCMAN_DATABASE_URL, then a local file)
        #[arg(long)]
        database_url: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
