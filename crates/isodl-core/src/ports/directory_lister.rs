//! Directory listing port.

use async_trait::async_trait;

use crate::error::CoreResult;

/// Extension a listed file must end with (case-insensitive) to be reported.
pub const ISO_EXTENSION: &str = ".iso";

/// Port for reading a remote directory listing.
///
/// # Contract
///
/// - Issues a single unauthenticated GET to `url`
/// - Returns `CoreError::Fetch` on transport failure or non-success status
/// - Returns only references whose lowercased form ends with [`ISO_EXTENSION`],
///   in document order, duplicates kept
/// - A page with no recognizable links yields an empty list, not an error
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryListerPort: Send + Sync {
    /// List artifact filenames referenced by the page at `url`.
    async fn list(&self, url: &str) -> CoreResult<Vec<String>>;
}
