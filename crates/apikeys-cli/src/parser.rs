//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use apikeys_http::DEFAULT_BASE_URL;
use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for managing API keys on a remote server.
#[derive(Parser)]
#[command(name = "apikeys")]
#[command(about = "Manage API keys through the admin REST API")]
#[command(version)]
pub struct Cli {
    /// Server the `/api/apikeys` routes live under
    #[arg(
        long = "base-url",
        env = "APIKEYS_BASE_URL",
        global = true,
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
