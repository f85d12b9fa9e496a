//! Resolved configuration locations, captured in one struct for the loader
//! and for `isodl source` output.

use std::fmt;

use super::{
    ConfigBaseResolution, ConfigSource, PathError, RemoteUrlResolution, resolve_config_base,
    resolve_remote_url,
};
use crate::catalog::LoaderConfig;

/// Where the catalog will be looked for, and why.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base: ConfigBaseResolution,
    pub remote: RemoteUrlResolution,
}

impl ResolvedConfig {
    /// Resolve both locations, honoring explicit overrides.
    pub fn resolve(
        explicit_base: Option<&str>,
        explicit_remote: Option<&str>,
    ) -> Result<Self, PathError> {
        Ok(Self {
            base: resolve_config_base(explicit_base)?,
            remote: resolve_remote_url(explicit_remote),
        })
    }

    /// Loader configuration for these locations.
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig::new(self.base.path.clone(), self.remote.url.clone())
    }
}

fn source_label(source: ConfigSource) -> &'static str {
    match source {
        ConfigSource::Explicit => "flag",
        ConfigSource::EnvVar => "env",
        ConfigSource::Default => "default",
    }
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loader = self.loader_config();
        writeln!(
            f,
            "config_base = {} ({})",
            self.base.path.display(),
            source_label(self.base.source)
        )?;
        writeln!(f, "single_file = {}", loader.single_file_path().display())?;
        write!(
            f,
            "remote_url = {} ({})",
            self.remote.url,
            source_label(self.remote.source)
        )
    }
}
