//! Show command handler.
//!
//! Prints every field of one distribution, its versions, and its flavors.

use std::fmt::Write;

use anyhow::Result;
use isodl_core::{CoreError, Distribution};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_optional, or_dash};

/// Execute the show command.
pub async fn execute(ctx: &CliContext, family: &str, distro: &str) -> Result<()> {
    let loaded = ctx.load_catalog().await?;
    let record = loaded
        .catalog
        .family(family)
        .ok_or_else(|| CliError::from(CoreError::family_not_found(family)))?
        .distros
        .get(distro)
        .ok_or_else(|| CliError::from(CoreError::distro_not_found(family, distro)))?;

    print!("{}", render(family, distro, record));
    Ok(())
}

pub fn render(family: &str, distro: &str, record: &Distribution) -> String {
    let mut out = String::new();
    let mode = record.mode().map_or("none", |m| m.label());

    let _ = writeln!(out, "{family}/{distro}");
    let _ = writeln!(out, "  mode:              {mode}");
    let _ = writeln!(out, "  base_url:          {}", or_dash(&record.base_url));
    let _ = writeln!(out, "  url_template:      {}", or_dash(&record.url_template));
    let _ = writeln!(out, "  filename_template: {}", or_dash(&record.filename_template));
    let _ = writeln!(out, "  list_url_template: {}", or_dash(&record.list_url_template));
    let _ = writeln!(out, "  filename_glob:     {}", or_dash(&record.filename_glob));

    if record.versions.is_empty() {
        let _ = writeln!(out, "  versions:          --");
    } else {
        let _ = writeln!(out, "  versions:          {}", record.versions.join(", "));
    }

    if !record.flavors.is_empty() {
        let _ = writeln!(out, "  flavors:");
        for (name, flavor) in &record.flavors {
            let overrides = flavor.overridden_fields();
            let summary = format_optional(
                (!overrides.is_empty()).then(|| overrides.join(", ")),
                "no overrides",
            );
            let _ = writeln!(out, "    {name} ({summary})");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use isodl_core::Flavor;

    #[test]
    fn test_render_template_distro() {
        let record = Distribution {
            base_url: "https://cdimage.debian.org/debian-cd".to_string(),
            url_template: "{base_url}/{version}/amd64/iso-cd/debian-{version}-amd64-netinst.iso"
                .to_string(),
            filename_template: "debian-{version}-amd64-netinst.iso".to_string(),
            versions: vec!["12.5.0".to_string(), "11.9.0".to_string()],
            ..Default::default()
        };

        let out = render("debian-based", "debian", &record);
        assert!(out.starts_with("debian-based/debian\n"));
        assert!(out.contains("mode:              template"));
        assert!(out.contains("list_url_template: --"));
        assert!(out.contains("versions:          12.5.0, 11.9.0"));
        assert!(!out.contains("flavors:"));
    }

    #[test]
    fn test_render_lists_flavors_with_overrides() {
        let mut record = Distribution::default();
        record.flavors.insert(
            "netinst".to_string(),
            Flavor {
                filename_template: Some("x.iso".to_string()),
                ..Default::default()
            },
        );
        record.flavors.insert("plain".to_string(), Flavor::default());

        let out = render("gnu", "debian", &record);
        assert!(out.contains("mode:              none"));
        assert!(out.contains("    netinst (filename_template)"));
        assert!(out.contains("    plain (no overrides)"));
    }
}
