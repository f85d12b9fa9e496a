//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no catalog lookups or resolution.

pub mod tables;

pub use tables::{format_optional, or_dash, print_separator, truncate_string};
