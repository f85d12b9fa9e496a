//! Public configuration for the HTTP client.

use std::time::Duration;

/// Configuration for the HTTP client.
///
/// # Example
///
/// ```
/// use isodl_http::HttpClientConfig;
/// use std::time::Duration;
///
/// let config = HttpClientConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout; `None` waits indefinitely
    pub(crate) timeout: Option<Duration>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("isodl/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl HttpClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a request timeout.
    ///
    /// No timeout is applied by default.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set an optional request timeout.
    #[must_use]
    pub const fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::new();
        assert!(config.user_agent.starts_with("isodl/"));
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = HttpClientConfig::new()
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_optional_timeout() {
        let with = HttpClientConfig::new().with_optional_timeout(Some(Duration::from_secs(5)));
        assert_eq!(with.timeout, Some(Duration::from_secs(5)));

        let without = HttpClientConfig::new()
            .with_timeout(Duration::from_secs(5))
            .with_optional_timeout(None);
        assert!(without.timeout.is_none());
    }
}
