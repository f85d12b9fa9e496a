//! Core port implementations for `HttpClient`.

use async_trait::async_trait;
use isodl_core::{CoreError, CoreResult, DirectoryListerPort, RemoteCatalogPort};

use crate::client::HttpClient;
use crate::error::HttpError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert an internal `HttpError` for `url` into `CoreError::Fetch`.
fn map_error(url: &str, err: HttpError) -> CoreError {
    let message = match err {
        HttpError::RequestFailed { status, .. } => format!("HTTP status {status}"),
        HttpError::Network(e) => e.to_string(),
        HttpError::InvalidUrl(e) => format!("invalid URL: {e}"),
    };
    CoreError::fetch(url, message)
}

// ============================================================================
// Port Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend> DirectoryListerPort for HttpClient<B> {
    async fn list(&self, url: &str) -> CoreResult<Vec<String>> {
        self.list_isos(url).await.map_err(|e| map_error(url, e))
    }
}

#[async_trait]
impl<B: HttpBackend> RemoteCatalogPort for HttpClient<B> {
    async fn fetch_catalog(&self, url: &str) -> CoreResult<String> {
        tracing::debug!(%url, "Fetching remote catalog");
        self.fetch_text(url).await.map_err(|e| map_error(url, e))
    }
}
