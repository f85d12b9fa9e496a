//! Port definitions (trait abstractions) for network collaborators.
//!
//! The loader and resolver only talk to the network through these traits.
//! The reqwest-backed implementations live in `isodl-http`; tests use the
//! generated mocks.
//!
//! # Design Rules
//!
//! - No HTTP client types in any signature
//! - Implementations map transport failures to `CoreError::Fetch`
//! - One request per call: no retries, no pagination

mod directory_lister;
mod remote_catalog;

pub use directory_lister::{DirectoryListerPort, ISO_EXTENSION};
pub use remote_catalog::RemoteCatalogPort;

#[cfg(test)]
pub use directory_lister::MockDirectoryListerPort;
#[cfg(test)]
pub use remote_catalog::MockRemoteCatalogPort;
