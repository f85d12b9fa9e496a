//! Non-fatal catalog checks.
//!
//! Resolution reports a missing mode only when a distribution is actually
//! resolved. These checks surface the same problems for the whole catalog up
//! front, without failing the load.

use std::fmt;

use super::catalog::Catalog;

/// What is wrong with a distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Neither the template pair nor the listing pair is complete.
    NoResolutionMode,
    /// The distribution lists no versions.
    NoVersions,
    /// `base_url` is set but is not an http(s) URL.
    InvalidBaseUrl(String),
}

/// A single finding from [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub family: String,
    pub distro: String,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: ", self.family, self.distro)?;
        match &self.kind {
            IssueKind::NoResolutionMode => write!(
                f,
                "needs url_template + filename_template or list_url_template + filename_glob"
            ),
            IssueKind::NoVersions => write!(f, "no versions listed"),
            IssueKind::InvalidBaseUrl(url) => {
                write!(f, "base_url '{url}' must start with http:// or https://")
            }
        }
    }
}

/// True when `url` uses an http or https scheme.
pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl Catalog {
    /// Check every distribution and collect the issues found.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for (family_key, family) in &self.families {
            for (distro_key, distro) in &family.distros {
                let mut push = |kind| {
                    issues.push(ValidationIssue {
                        family: family_key.clone(),
                        distro: distro_key.clone(),
                        kind,
                    });
                };

                if distro.mode().is_none() {
                    push(IssueKind::NoResolutionMode);
                }
                if distro.versions.is_empty() {
                    push(IssueKind::NoVersions);
                }
                if !distro.base_url.is_empty() && !is_http_url(&distro.base_url) {
                    push(IssueKind::InvalidBaseUrl(distro.base_url.clone()));
                }
            }
        }

        issues
    }
}
