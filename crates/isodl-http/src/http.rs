//! HTTP backend abstraction.
//!
//! The client is generic over [`HttpBackend`] so tests can swap in a fake.
//! The production backend issues exactly one GET per call: no retries,
//! no authentication.

use async_trait::async_trait;
use url::Url;

use crate::config::HttpClientConfig;
use crate::error::{HttpError, HttpResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch a document body.
///
/// This is an implementation detail - external code should go through the
/// core ports implemented by `HttpClient`.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET `url` and return the body as text.
    ///
    /// Non-success statuses are errors.
    async fn get_text(&self, url: &Url) -> HttpResult<String>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &HttpClientConfig) -> HttpResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_text(&self, url: &Url) -> HttpResult<String> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
