//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for resolving distribution ISO download URLs.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "isodl")]
#[command(about = "Resolve Linux distribution ISO download URLs")]
#[command(version)]
pub struct Cli {
    /// Catalog location: a directory tree or a single JSON file
    /// (defaults to $ISO_DOWNLOADER_CONFIG, then ./data)
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Fallback catalog URL (defaults to $ISO_DOWNLOADER_REMOTE_URL, then the
    /// upstream catalog)
    #[arg(long = "remote-url", global = true, value_name = "URL")]
    pub remote_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
