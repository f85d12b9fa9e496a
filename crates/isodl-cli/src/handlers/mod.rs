//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Load the catalog through the context
//!   2. Call core lookups or the resolver
//!   3. Format output for the terminal
//!
//! Rendering lives in plain functions returning `String` so it can be
//! tested without a terminal.

pub mod check;
pub mod distros;
pub mod families;
pub mod resolve;
pub mod show;
pub mod source;
