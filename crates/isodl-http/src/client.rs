//! HTTP client implementing the core network ports.

use url::Url;

use crate::config::HttpClientConfig;
use crate::error::HttpResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::parsing::extract_iso_links;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default client using the reqwest HTTP backend.
pub type DefaultHttpClient = HttpClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for directory listings and the remote catalog document.
///
/// Generic over an HTTP backend so it can be tested without a network.
/// Use `DefaultHttpClient` in production.
pub struct HttpClient<B: HttpBackend> {
    pub(crate) backend: B,
}

impl DefaultHttpClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &HttpClientConfig) -> HttpResult<Self> {
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
        })
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> HttpResult<Self> {
        Self::new(&HttpClientConfig::default())
    }
}

impl<B: HttpBackend> HttpClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch `url` and return its body.
    pub(crate) async fn fetch_text(&self, url: &str) -> HttpResult<String> {
        let url = Url::parse(url)?;
        self.backend.get_text(&url).await
    }

    /// Fetch the listing page at `url` and return its `.iso` links.
    pub(crate) async fn list_isos(&self, url: &str) -> HttpResult<Vec<String>> {
        let body = self.fetch_text(url).await?;
        let links = extract_iso_links(&body);
        tracing::debug!(%url, count = links.len(), "Extracted ISO links");
        Ok(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;
    use crate::http::testing::{CannedResponse, FakeBackend};

    #[test]
    fn test_default_client_creation() {
        assert!(DefaultHttpClient::default_client().is_ok());
    }

    #[tokio::test]
    async fn test_list_isos_filters_listing() {
        let backend = FakeBackend::new().with_response(
            "/12/",
            CannedResponse::body(
                r#"<a href="debian-12-amd64-netinst.iso">n</a><a href="other.txt">o</a>"#,
            ),
        );
        let client = HttpClient::with_backend(backend);

        let links = client.list_isos("http://x/12/").await.unwrap();
        assert_eq!(links, vec!["debian-12-amd64-netinst.iso"]);
        assert_eq!(client.backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_request() {
        let client = HttpClient::with_backend(FakeBackend::new());

        let result = client.fetch_text("not a url").await;
        assert!(matches!(result, Err(HttpError::InvalidUrl(_))));
        assert!(client.backend.requests().is_empty());
    }
}
