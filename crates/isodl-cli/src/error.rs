//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` kinds to exit codes and user-facing messages.

use isodl_core::{CoreError, PathError};
use isodl_http::HttpError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog is missing, malformed, or incomplete.
    #[error("{0}")]
    Config(String),

    /// Unknown family or distribution.
    #[error("{0}")]
    NotFound(String),

    /// A network request failed.
    #[error("{0}")]
    Fetch(String),

    /// A directory listing had no file matching the glob.
    #[error("{0}")]
    NoMatch(String),

    /// `isodl check` found problems.
    #[error("catalog has {0} issue(s)")]
    Validation(usize),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: Catalog validation failed
    /// - 2: Unknown family or distribution (usage)
    /// - 65: No listed file matched (`EX_DATAERR`)
    /// - 69: Network failure (`EX_UNAVAILABLE`)
    /// - 78: Configuration error (`EX_CONFIG`)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 1,
            Self::NotFound(_) => 2,
            Self::NoMatch(_) => 65,
            Self::Fetch(_) => 69,
            Self::Config(_) => 78,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::Config { .. } => Self::Config(message),
            CoreError::NotFound { .. } => Self::NotFound(message),
            CoreError::Fetch { .. } => Self::Fetch(message),
            CoreError::NoMatch { .. } => Self::NoMatch(message),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<HttpError> for CliError {
    fn from(err: HttpError) -> Self {
        Self::Fetch(format!("HTTP client setup failed: {err}"))
    }
}
