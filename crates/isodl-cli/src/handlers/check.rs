//! Check command handler.
//!
//! Loads the catalog and reports distributions that cannot be resolved or
//! look misconfigured. Exits non-zero when any issue is found.

use anyhow::Result;
use isodl_core::ValidationIssue;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the check command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let loaded = ctx.load_catalog().await?;
    let issues = loaded.catalog.validate();

    println!(
        "Checked {} distribution(s) in {} family(ies) from {}",
        loaded.catalog.distribution_count(),
        loaded.catalog.families.len(),
        loaded.origin
    );

    if issues.is_empty() {
        println!("No issues found.");
        return Ok(());
    }

    print!("{}", render(&issues));
    Err(CliError::Validation(issues.len()).into())
}

pub fn render(issues: &[ValidationIssue]) -> String {
    issues.iter().map(|issue| format!("  {issue}\n")).collect()
}
