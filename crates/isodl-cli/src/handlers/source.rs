//! Source command handler.
//!
//! Prints the resolved catalog locations in `key = value` form, then which
//! source actually supplied the catalog.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the source command.
///
/// Locations are printed before loading so they are visible even when no
/// source yields a catalog.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    println!("{}", ctx.paths);

    let loaded = ctx.load_catalog().await?;
    println!("loaded_from = {}", loaded.origin);
    println!(
        "families = {}, distributions = {}",
        loaded.catalog.families.len(),
        loaded.catalog.distribution_count()
    );
    Ok(())
}
