//! Catalog loading.
//!
//! The catalog comes from exactly one source. Sources are tried in a fixed
//! order and the first one that produces at least one family supplies the
//! whole catalog; nothing is merged across sources.
//!
//! ```text
//! base is a directory? ── yes ──► DirectoryTree(base)      ─┐
//!                                                           │ empty
//! LocalFile(base/distros.json or base) ◄────────────────────┘
//!        │ missing or empty
//!        ▼
//! Remote(remote_url)
//!        │ empty
//!        ▼
//! ConfigError
//! ```
//!
//! Each strategy returns `Ok(None)` when it does not apply and `Err` when it
//! applies but the configuration is broken. Errors stop the chain.

mod directory;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::ports::RemoteCatalogPort;

pub use directory::{FLAVOR_INDEX_FILES, RECORD_EXTENSION, load_tree};

/// Name of the monolithic catalog file inside a base directory.
pub const SINGLE_FILE_NAME: &str = "distros.json";

// ============================================================================
// Sources
// ============================================================================

/// One place a catalog can come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// `base/<family>/<distro>/<distro>.json` layout.
    DirectoryTree(PathBuf),
    /// A single JSON document on disk.
    LocalFile(PathBuf),
    /// A single JSON document fetched over HTTP.
    Remote(String),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryTree(path) => write!(f, "directory tree {}", path.display()),
            Self::LocalFile(path) => write!(f, "file {}", path.display()),
            Self::Remote(url) => write!(f, "remote {url}"),
        }
    }
}

/// Where to look for the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directory tree root, or the path of a single catalog file.
    pub base_path: PathBuf,
    /// Fallback document URL.
    pub remote_url: String,
}

impl LoaderConfig {
    pub fn new(base_path: impl Into<PathBuf>, remote_url: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            remote_url: remote_url.into(),
        }
    }

    /// The single-file candidate: `base/distros.json` when the base is a
    /// directory, otherwise the base itself.
    pub fn single_file_path(&self) -> PathBuf {
        if self.base_path.is_dir() {
            self.base_path.join(SINGLE_FILE_NAME)
        } else {
            self.base_path.clone()
        }
    }

    /// Sources to try, highest priority first.
    pub fn sources(&self) -> Vec<CatalogSource> {
        let mut sources = Vec::with_capacity(3);
        if self.base_path.is_dir() {
            sources.push(CatalogSource::DirectoryTree(self.base_path.clone()));
        }
        sources.push(CatalogSource::LocalFile(self.single_file_path()));
        sources.push(CatalogSource::Remote(self.remote_url.clone()));
        sources
    }
}

/// A catalog together with the source that supplied it.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub origin: CatalogSource,
}

// ============================================================================
// Loader
// ============================================================================

/// Builds the catalog from the first usable source.
pub struct CatalogLoader {
    config: LoaderConfig,
}

impl CatalogLoader {
    pub const fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load the catalog.
    ///
    /// `remote` is only called when no local source produced a catalog.
    pub async fn load(&self, remote: &dyn RemoteCatalogPort) -> CoreResult<LoadedCatalog> {
        let sources = self.config.sources();

        for source in &sources {
            tracing::debug!(%source, "Trying catalog source");

            if let Some(catalog) = try_source(source, remote).await? {
                tracing::info!(
                    %source,
                    families = catalog.families.len(),
                    distributions = catalog.distribution_count(),
                    "Loaded catalog"
                );
                return Ok(LoadedCatalog {
                    catalog,
                    origin: source.clone(),
                });
            }

            tracing::debug!(%source, "Source produced no families, falling through");
        }

        let tried = sources
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(CoreError::config(format!(
            "no catalog source produced any families (tried {tried})"
        )))
    }
}

/// Run one strategy. `Ok(None)` means "not applicable or empty".
async fn try_source(
    source: &CatalogSource,
    remote: &dyn RemoteCatalogPort,
) -> CoreResult<Option<Catalog>> {
    let catalog = match source {
        CatalogSource::DirectoryTree(base) => load_tree(base)?,
        CatalogSource::LocalFile(path) => match load_single_file(path)? {
            Some(catalog) => catalog,
            None => return Ok(None),
        },
        CatalogSource::Remote(url) => load_remote(url, remote).await?,
    };

    Ok((!catalog.is_empty()).then_some(catalog))
}

/// Read a monolithic catalog file. `None` when the file does not exist.
pub fn load_single_file(path: &Path) -> CoreResult<Option<Catalog>> {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "No catalog file");
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| CoreError::config(format!("read {}: {e}", path.display())))?;
    Catalog::from_json(&content)
        .map(Some)
        .map_err(|e| CoreError::config(format!("parse {}: {e}", path.display())))
}

/// Fetch and parse the remote catalog.
///
/// Every failure on this path is a configuration error: the remote document
/// is the last resort for finding any configuration at all.
pub async fn load_remote(url: &str, remote: &dyn RemoteCatalogPort) -> CoreResult<Catalog> {
    let body = remote
        .fetch_catalog(url)
        .await
        .map_err(|e| CoreError::config(format!("fetch remote catalog: {e}")))?;

    Catalog::from_json(&body)
        .map_err(|e| CoreError::config(format!("parse remote catalog from {url}: {e}")))
}
