//! Core of isodl: the distribution catalog model, catalog loading and
//! download URL resolution.
//!
//! Network access goes through the traits in [`ports`]; the HTTP-backed
//! implementations live in `isodl-http`.

#![deny(unused_crate_dependencies)]

pub mod catalog;
pub mod domain;
pub mod error;
pub mod glob;
pub mod paths;
pub mod ports;
pub mod resolver;
pub mod template;

// Re-export commonly used types for convenience
pub use catalog::{CatalogLoader, CatalogSource, LoadedCatalog, LoaderConfig, SINGLE_FILE_NAME};
pub use domain::{
    Catalog, Distribution, Family, Flavor, IssueKind, ResolutionMode, ResolvedItem,
    ValidationIssue, VersionSelection,
};
pub use error::{CoreError, CoreResult, LookupKind};
pub use glob::GlobPattern;
pub use ports::{DirectoryListerPort, ISO_EXTENSION, RemoteCatalogPort};
pub use resolver::UrlResolver;
pub use template::{Placeholder, Substitutions, expand};

pub use paths::{
    CONFIG_BASE_ENV, ConfigBaseResolution, ConfigSource, DEFAULT_CONFIG_BASE, DEFAULT_REMOTE_URL,
    PathError, REMOTE_URL_ENV, RemoteUrlResolution, ResolvedConfig, resolve_config_base,
    resolve_remote_url,
};
