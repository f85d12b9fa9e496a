//! Core domain types.
//!
//! # Structure
//!
//! - `catalog` - configuration model (`Catalog`, `Family`, `Distribution`, `Flavor`)
//! - `resolved` - resolution output and version selection
//! - `validation` - non-fatal catalog checks

mod catalog;
mod resolved;
mod validation;

pub(crate) use catalog::null_as_default;
pub use catalog::{Catalog, Distribution, Family, Flavor, ResolutionMode};
pub use resolved::{ResolvedItem, VersionSelection};
pub use validation::{IssueKind, ValidationIssue, is_http_url};
