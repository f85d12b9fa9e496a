//! Link extraction from directory listing pages.
//!
//! Listing pages are treated as plain text: anything that looks like an
//! `href="..."` or `href='...'` attribute is a candidate. No HTML parser is
//! involved, so a malformed page simply yields fewer links.

use std::sync::LazyLock;

use isodl_core::ISO_EXTENSION;
use regex::Regex;

static HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("href pattern is valid")
});

/// Every `href` value in `body`, in document order.
pub fn extract_hrefs(body: &str) -> Vec<&str> {
    HREF.captures_iter(body)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .collect()
}

/// `href` values whose lowercased form ends with `.iso`.
///
/// Order is preserved and duplicates are kept.
pub fn extract_iso_links(body: &str) -> Vec<String> {
    extract_hrefs(body)
        .into_iter()
        .filter(|href| href.to_lowercase().ends_with(ISO_EXTENSION))
        .map(str::to_string)
        .collect()
}
