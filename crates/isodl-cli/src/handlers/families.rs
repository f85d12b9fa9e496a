//! Families command handler.

use std::fmt::Write;

use anyhow::Result;
use isodl_core::Catalog;

use crate::bootstrap::CliContext;

/// Execute the families command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let loaded = ctx.load_catalog().await?;
    print!("{}", render(&loaded.catalog));
    Ok(())
}

/// One line per family with its distribution count.
pub fn render(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<24} Distros", "Family");
    let _ = writeln!(out, "{}", "-".repeat(32));
    for (key, family) in &catalog.families {
        let _ = writeln!(out, "{key:<24} {}", family.distros.len());
    }
    out
}
