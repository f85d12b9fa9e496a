//! Distros command handler.

use std::fmt::Write;

use anyhow::Result;
use isodl_core::{CoreError, Family};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the distros command.
pub async fn execute(ctx: &CliContext, family_key: &str) -> Result<()> {
    let loaded = ctx.load_catalog().await?;
    let family = loaded
        .catalog
        .family(family_key)
        .ok_or_else(|| CliError::from(CoreError::family_not_found(family_key)))?;

    print!("{}", render(family));
    Ok(())
}

/// Table of a family's distributions: mode, version count, flavor count.
pub fn render(family: &Family) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<20} {:<10} {:<9} Flavors", "Distro", "Mode", "Versions");
    let _ = writeln!(out, "{}", "-".repeat(48));
    for (key, distro) in &family.distros {
        let mode = distro.mode().map_or("none", |m| m.label());
        let _ = writeln!(
            out,
            "{key:<20} {mode:<10} {:<9} {}",
            distro.versions.len(),
            distro.flavors.len()
        );
    }
    out
}
