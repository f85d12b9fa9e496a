//! Remote catalog port.

use async_trait::async_trait;

use crate::error::CoreResult;

/// Port for fetching the raw text of a remote catalog document.
///
/// Parsing stays in the loader so every source goes through the same
/// deserializer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteCatalogPort: Send + Sync {
    /// GET `url` and return the response body.
    ///
    /// Returns `CoreError::Fetch` on transport failure or non-success status.
    async fn fetch_catalog(&self, url: &str) -> CoreResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn RemoteCatalogPort>) {}
}
