//! HTTP adapters for isodl.
//!
//! [`HttpClient`] implements the core `DirectoryListerPort` (fetch a listing
//! page, keep its `.iso` links) and `RemoteCatalogPort` (fetch the fallback
//! catalog document). Every call is a single unauthenticated GET.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod parsing;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultHttpClient, HttpClient};

// Configuration
pub use config::HttpClientConfig;

// Errors
pub use error::{HttpError, HttpResult};

// Backend seam and link extraction
pub use http::{HttpBackend, ReqwestBackend};
pub use parsing::{extract_hrefs, extract_iso_links};
