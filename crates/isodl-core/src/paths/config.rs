//! Configuration location resolution.
//!
//! Resolves where the catalog lives from an explicit value, environment
//! variables, or built-in defaults, recording which one won.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the catalog base path.
pub const CONFIG_BASE_ENV: &str = "ISO_DOWNLOADER_CONFIG";

/// Environment variable overriding the remote fallback URL.
pub const REMOTE_URL_ENV: &str = "ISO_DOWNLOADER_REMOTE_URL";

/// Catalog base path used when nothing else is configured, relative to the
/// working directory.
pub const DEFAULT_CONFIG_BASE: &str = "data";

/// Canonical catalog fetched when no local source is usable.
pub const DEFAULT_REMOTE_URL: &str =
    "https://raw.githubusercontent.com/dhruvmistry2000/iso-downloader/refs/heads/main/data/distros.json";

/// How a configuration value was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed explicitly (CLI flag).
    Explicit,
    /// Read from an environment variable or `.env`.
    EnvVar,
    /// Built-in default.
    Default,
}

/// Resolution result for the catalog base path.
#[derive(Debug, Clone)]
pub struct ConfigBaseResolution {
    /// Absolute base path (a directory tree or a single file).
    pub path: PathBuf,
    /// How the path was determined.
    pub source: ConfigSource,
}

/// Resolution result for the remote fallback URL.
#[derive(Debug, Clone)]
pub struct RemoteUrlResolution {
    pub url: String,
    pub source: ConfigSource,
}

/// Resolve the catalog base path.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `ISO_DOWNLOADER_CONFIG` environment variable
/// 3. `data` under the current directory
pub fn resolve_config_base(explicit: Option<&str>) -> Result<ConfigBaseResolution, PathError> {
    if let Some(path_str) = explicit {
        return Ok(ConfigBaseResolution {
            path: normalize_user_path(path_str)?,
            source: ConfigSource::Explicit,
        });
    }

    if let Some(env_path) = non_empty_env(CONFIG_BASE_ENV) {
        return Ok(ConfigBaseResolution {
            path: normalize_user_path(&env_path)?,
            source: ConfigSource::EnvVar,
        });
    }

    Ok(ConfigBaseResolution {
        path: normalize_user_path(DEFAULT_CONFIG_BASE)?,
        source: ConfigSource::Default,
    })
}

/// Resolve the remote fallback URL.
///
/// Same precedence as [`resolve_config_base`], falling back to
/// [`DEFAULT_REMOTE_URL`].
pub fn resolve_remote_url(explicit: Option<&str>) -> RemoteUrlResolution {
    if let Some(url) = explicit.map(str::trim).filter(|u| !u.is_empty()) {
        return RemoteUrlResolution {
            url: url.to_string(),
            source: ConfigSource::Explicit,
        };
    }

    if let Some(url) = non_empty_env(REMOTE_URL_ENV) {
        return RemoteUrlResolution {
            url: url.trim().to_string(),
            source: ConfigSource::EnvVar,
        };
    }

    RemoteUrlResolution {
        url: DEFAULT_REMOTE_URL.to_string(),
        source: ConfigSource::Default,
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Expand `~` and make the path absolute against the working directory.
fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
