//! Internal error types for HTTP operations.
//!
//! These errors are mapped to `CoreError::Fetch` at the port boundary.

use thiserror::Error;

/// Result type alias for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors related to fetching documents over HTTP.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_error_message() {
        let error = HttpError::RequestFailed {
            status: 404,
            url: "https://cdimage.debian.org/debian-cd/12/".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("cdimage.debian.org"));
    }

    #[test]
    fn test_invalid_url_from_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let error: HttpError = parse_err.into();
        assert!(matches!(error, HttpError::InvalidUrl(_)));
        assert!(error.to_string().starts_with("invalid URL"));
    }
}
