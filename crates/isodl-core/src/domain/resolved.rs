//! Resolution output types.

use serde::{Deserialize, Serialize};

/// One concrete artifact ready for the download stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedItem {
    /// Absolute download URL.
    pub url: String,
    /// Filename to save the artifact under.
    pub filename: String,
    /// The requested version this item was resolved for.
    pub version: String,
}

impl ResolvedItem {
    pub fn new(
        url: impl Into<String>,
        filename: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            filename: filename.into(),
            version: version.into(),
        }
    }
}

/// Which versions of a distribution to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VersionSelection {
    /// Every version the distribution lists, in its configured order.
    #[default]
    All,
    /// An explicit list, resolved in the given order.
    Only(Vec<String>),
}

impl VersionSelection {
    /// Build a selection from free-form user input.
    ///
    /// An empty list means "all versions", the same as picking nothing in an
    /// interactive picker.
    pub fn from_requested(versions: Vec<String>) -> Self {
        if versions.is_empty() {
            Self::All
        } else {
            Self::Only(versions)
        }
    }

    /// Expand the selection against a distribution's version list.
    pub fn expand(&self, available: &[String]) -> Vec<String> {
        match self {
            Self::All => available.to_vec(),
            Self::Only(versions) if versions.is_empty() => available.to_vec(),
            Self::Only(versions) => versions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<String> {
        vec!["24.04".to_string(), "22.04".to_string()]
    }

    #[test]
    fn test_all_keeps_configured_order() {
        assert_eq!(VersionSelection::All.expand(&available()), available());
    }

    #[test]
    fn test_empty_request_means_all() {
        let selection = VersionSelection::from_requested(Vec::new());
        assert_eq!(selection, VersionSelection::All);
        assert_eq!(
            VersionSelection::Only(Vec::new()).expand(&available()),
            available()
        );
    }

    #[test]
    fn test_explicit_versions_pass_through_unchanged() {
        let selection = VersionSelection::from_requested(vec!["20.04".to_string()]);
        assert_eq!(selection.expand(&available()), vec!["20.04".to_string()]);
    }

    #[test]
    fn test_resolved_item_serializes() {
        let item = ResolvedItem::new("http://x/12/debian.iso", "debian-12.iso", "12");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["url"], "http://x/12/debian.iso");
        assert_eq!(json["filename"], "debian-12.iso");
        assert_eq!(json["version"], "12");
    }
}
