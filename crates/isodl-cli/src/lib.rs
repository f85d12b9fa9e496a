//! `isodl` command-line adapter.
//!
//! Parses arguments, wires the HTTP client into the core loader and
//! resolver, and renders results for the terminal.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary target
use dotenvy as _;
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, init_tracing};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
