//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Configuration locations (via isodl-core paths)
//! - HTTP client for listings and the remote catalog (via isodl-http)
//! - Catalog loader and URL resolver (via isodl-core)
//!
//! Handlers receive a `CliContext` and never build adapters themselves.

use std::sync::Arc;

use isodl_core::{CatalogLoader, LoadedCatalog, ResolvedConfig, UrlResolver};
use isodl_http::{DefaultHttpClient, HttpClientConfig};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Log filter used when `RUST_LOG` is unset.
pub const fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,isodl_core=debug,isodl_http=debug,isodl_cli=debug"
    } else {
        "warn"
    }
}

/// Install the global tracing subscriber, writing to stderr.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// `--config` override.
    pub config_base: Option<String>,
    /// `--remote-url` override.
    pub remote_url: Option<String>,
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Where the catalog is looked for, and why.
    pub paths: ResolvedConfig,
    /// Shared HTTP client; implements both network ports.
    pub http: Arc<DefaultHttpClient>,
}

impl CliContext {
    /// Load the catalog from the first usable source.
    pub async fn load_catalog(&self) -> Result<LoadedCatalog, CliError> {
        let loader = CatalogLoader::new(self.paths.loader_config());
        Ok(loader.load(self.http.as_ref()).await?)
    }

    /// A resolver backed by the shared HTTP client.
    pub fn resolver(&self) -> UrlResolver {
        UrlResolver::new(self.http.clone())
    }
}

/// Build the CLI context.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let paths = ResolvedConfig::resolve(config.config_base.as_deref(), config.remote_url.as_deref())?;
    tracing::debug!(
        base = %paths.base.path.display(),
        remote = %paths.remote.url,
        "Resolved configuration locations"
    );

    let http = DefaultHttpClient::new(&HttpClientConfig::new())?;

    Ok(CliContext {
        paths,
        http: Arc::new(http),
    })
}
