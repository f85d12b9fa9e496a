//! Resolve command handler.
//!
//! Turns a family/distro/version selection into download URLs and prints
//! them as a table or as JSON for the download stage.

use std::fmt::Write;

use anyhow::Result;
use isodl_core::{ResolvedItem, VersionSelection};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_separator, truncate_string};

/// Arguments for the resolve command.
#[derive(Debug, Clone)]
pub struct ResolveArgs {
    pub family: String,
    pub distro: String,
    pub versions: Vec<String>,
    pub all: bool,
    pub json: bool,
}

impl ResolveArgs {
    /// `--all`, or no versions at all, selects every configured version.
    pub fn selection(&self) -> VersionSelection {
        if self.all {
            VersionSelection::All
        } else {
            VersionSelection::from_requested(self.versions.clone())
        }
    }
}

/// Execute the resolve command.
pub async fn execute(ctx: &CliContext, args: ResolveArgs) -> Result<()> {
    let loaded = ctx.load_catalog().await?;
    let items = ctx
        .resolver()
        .resolve_selection(&loaded.catalog, &args.family, &args.distro, &args.selection())
        .await
        .map_err(CliError::from)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No versions configured for {}/{}.", args.family, args.distro);
        return Ok(());
    }

    println!("{:<14} {:<40} URL", "Version", "Filename");
    print_separator(100);
    print!("{}", render_rows(&items));
    Ok(())
}

pub fn render_rows(items: &[ResolvedItem]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(
            out,
            "{:<14} {:<40} {}",
            truncate_string(&item.version, 13),
            truncate_string(&item.filename, 39),
            item.url
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(versions: &[&str], all: bool) -> ResolveArgs {
        ResolveArgs {
            family: "gnu".to_string(),
            distro: "debian".to_string(),
            versions: versions.iter().map(|v| (*v).to_string()).collect(),
            all,
            json: false,
        }
    }

    #[test]
    fn test_selection() {
        assert_eq!(args(&[], true).selection(), VersionSelection::All);
        assert_eq!(args(&[], false).selection(), VersionSelection::All);
        assert_eq!(
            args(&["12"], false).selection(),
            VersionSelection::Only(vec!["12".to_string()])
        );
    }

    #[test]
    fn test_render_rows_keeps_full_url() {
        let items = vec![ResolvedItem::new(
            "http://x/12/debian-12-amd64-netinst.iso",
            "debian-12-amd64-netinst.iso",
            "12",
        )];

        let out = render_rows(&items);
        assert!(out.starts_with("12 "));
        assert!(out.trim_end().ends_with("http://x/12/debian-12-amd64-netinst.iso"));
    }

    #[test]
    fn test_json_shape() {
        let items = vec![ResolvedItem::new("http://x/12/debian.iso", "debian-12.iso", "12")];
        let value = serde_json::to_value(&items).unwrap();
        assert_eq!(value[0]["url"], "http://x/12/debian.iso");
        assert_eq!(value[0]["filename"], "debian-12.iso");
        assert_eq!(value[0]["version"], "12");
    }
}
