//! Core error type.
//!
//! Every failure the loader and resolver surface maps to one of four kinds.
//! Adapters translate their own errors into these at the port boundary and
//! the CLI maps them to exit codes.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Which catalog key could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Family,
    Distribution,
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Family => write!(f, "family"),
            Self::Distribution => write!(f, "distribution"),
        }
    }
}

/// Errors from catalog loading and URL resolution.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration is missing, malformed, or incomplete.
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong and where
        message: String,
    },

    /// A family or distribution key is not in the catalog.
    #[error("{kind} '{key}' not found")]
    NotFound {
        /// Whether a family or a distribution was missing
        kind: LookupKind,
        /// The key that was looked up (`family` or `family/distro`)
        key: String,
    },

    /// A network GET failed or returned a non-success status.
    #[error("Failed to fetch {url}: {message}")]
    Fetch {
        /// The URL that was requested
        url: String,
        /// Transport error or status description
        message: String,
    },

    /// No listed filename matched the glob.
    #[error("No ISO matching '{glob}' at {url} for {target}")]
    NoMatch {
        /// What was being resolved (`family/distro@version`)
        target: String,
        /// The expanded glob that was tried
        glob: String,
        /// The listing URL that was scanned
        url: String,
    },
}

impl CoreError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a fetch error.
    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Unknown family key.
    pub fn family_not_found(family: &str) -> Self {
        Self::NotFound {
            kind: LookupKind::Family,
            key: family.to_string(),
        }
    }

    /// Unknown distribution key under a known family.
    pub fn distro_not_found(family: &str, distro: &str) -> Self {
        Self::NotFound {
            kind: LookupKind::Distribution,
            key: format!("{family}/{distro}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let error = CoreError::config("parse distro gnu/debian: expected value");
        assert!(error.to_string().starts_with("Configuration error:"));
        assert!(error.to_string().contains("gnu/debian"));
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            CoreError::family_not_found("nope").to_string(),
            "family 'nope' not found"
        );
        assert_eq!(
            CoreError::distro_not_found("gnu", "nope").to_string(),
            "distribution 'gnu/nope' not found"
        );
    }

    #[test]
    fn test_fetch_error_message() {
        let error = CoreError::fetch("https://example.com/", "HTTP 404 Not Found");
        let msg = error.to_string();
        assert!(msg.contains("https://example.com/"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn test_no_match_error_message() {
        let error = CoreError::NoMatch {
            target: "gnu/debian@12".to_string(),
            glob: "debian-12-*.iso".to_string(),
            url: "http://x/12/".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No ISO matching 'debian-12-*.iso' at http://x/12/ for gnu/debian@12"
        );
    }
}
