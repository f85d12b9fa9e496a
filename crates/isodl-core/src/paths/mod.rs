//! Configuration location resolution for isodl.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No terminal I/O - adapters decide how to present the result

mod config;
mod error;
mod resolver;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{
    CONFIG_BASE_ENV, ConfigBaseResolution, ConfigSource, DEFAULT_CONFIG_BASE, DEFAULT_REMOTE_URL,
    REMOTE_URL_ENV, RemoteUrlResolution, resolve_config_base, resolve_remote_url,
};
pub use error::PathError;
pub use resolver::ResolvedConfig;
