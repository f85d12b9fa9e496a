//! Catalog domain types.
//!
//! These types mirror the on-disk configuration shape one to one, so the
//! same structs deserialize a monolithic `distros.json`, a single
//! `<distro>.json` record from a directory tree, or a remote document.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Deserialize an explicit `null` the same as a missing field.
///
/// Catalogs written by other tools emit `"versions": null` for empty lists.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog / Family
// ─────────────────────────────────────────────────────────────────────────────

/// The fully loaded configuration for one run.
///
/// Keyed by family. Iteration order is sorted by key, which is also the order
/// a selection layer presents families in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Families keyed by family name (e.g. "debian-based").
    #[serde(default, deserialize_with = "null_as_default")]
    pub families: BTreeMap<String, Family>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from the single-file JSON shape.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// True when no family is present.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Look up a family by key.
    pub fn family(&self, key: &str) -> Option<&Family> {
        self.families.get(key)
    }

    /// Look up a distribution by family and distribution key.
    pub fn distribution(&self, family: &str, distro: &str) -> Option<&Distribution> {
        self.family(family).and_then(|f| f.distros.get(distro))
    }

    /// Family keys in sorted order.
    pub fn family_keys(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Total number of distributions across all families.
    pub fn distribution_count(&self) -> usize {
        self.families.values().map(|f| f.distros.len()).sum()
    }

    /// Insert a family, replacing any previous entry with the same key.
    pub fn insert_family(&mut self, key: impl Into<String>, family: Family) {
        self.families.insert(key.into(), family);
    }
}

/// A grouping of related distributions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Distributions keyed by distribution name (e.g. "debian").
    #[serde(default, deserialize_with = "null_as_default")]
    pub distros: BTreeMap<String, Distribution>,
}

impl Family {
    /// Distribution keys in sorted order.
    pub fn distro_keys(&self) -> impl Iterator<Item = &str> {
        self.distros.keys().map(String::as_str)
    }

    /// True when the family has no distributions.
    pub fn is_empty(&self) -> bool {
        self.distros.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Distribution
// ─────────────────────────────────────────────────────────────────────────────

/// A downloadable product with one or more released versions.
///
/// A usable distribution carries either the template pair
/// (`url_template` + `filename_template`) or the listing pair
/// (`list_url_template` + `filename_glob`). Missing both is only reported
/// when someone tries to resolve it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Value substituted for `{base_url}`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_url: String,
    /// Full download URL template (template mode).
    #[serde(default, deserialize_with = "null_as_default")]
    pub url_template: String,
    /// Saved filename template (template mode).
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename_template: String,
    /// URL of the directory listing to scan (listing mode).
    #[serde(default, deserialize_with = "null_as_default")]
    pub list_url_template: String,
    /// Glob the listed filenames are matched against (listing mode).
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename_glob: String,
    /// Released versions, in the order they are offered and expanded.
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Vec<String>,
    /// Named variants. Loaded and shown, never used to resolve URLs.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub flavors: BTreeMap<String, Flavor>,
}

/// How a distribution's download location is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode<'a> {
    /// Filename discovered by matching a directory listing.
    Listing {
        list_url_template: &'a str,
        filename_glob: &'a str,
    },
    /// URL and filename produced by substitution alone.
    Template {
        url_template: &'a str,
        filename_template: &'a str,
    },
}

impl ResolutionMode<'_> {
    /// Short label used in CLI tables.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Listing { .. } => "listing",
            Self::Template { .. } => "template",
        }
    }
}

impl Distribution {
    /// The resolution mode this distribution is configured for.
    ///
    /// Listing mode takes precedence when both pairs are present.
    pub fn mode(&self) -> Option<ResolutionMode<'_>> {
        if !self.list_url_template.is_empty() && !self.filename_glob.is_empty() {
            Some(ResolutionMode::Listing {
                list_url_template: &self.list_url_template,
                filename_glob: &self.filename_glob,
            })
        } else if !self.url_template.is_empty() && !self.filename_template.is_empty() {
            Some(ResolutionMode::Template {
                url_template: &self.url_template,
                filename_template: &self.filename_template,
            })
        } else {
            None
        }
    }

    /// Parse a single distribution record.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Flavor
// ─────────────────────────────────────────────────────────────────────────────

/// Per-flavor overrides of a distribution's URL rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flavor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_url_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename_glob: Option<String>,
}

impl Flavor {
    /// Parse a single flavor record.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Names of the fields this flavor overrides.
    pub fn overridden_fields(&self) -> Vec<&'static str> {
        [
            ("base_url", &self.base_url),
            ("url_template", &self.url_template),
            ("filename_template", &self.filename_template),
            ("list_url_template", &self.list_url_template),
            ("filename_glob", &self.filename_glob),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(name, _)| name)
        .collect()
    }
}
