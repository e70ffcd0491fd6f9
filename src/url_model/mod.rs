//! URL modeling: deriving safe relative storage paths from request URLs.

mod sanitize;

pub use sanitize::sanitize_segment;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Derives the relative storage path for `url`: the host followed by each
/// non-empty path segment, every component sanitized for Linux filesystems.
///
/// `default_file` is appended when the URL path is empty or ends in `/`, so
/// directory-like URLs still map to a file.
pub fn relative_path_from_url(url: &str, default_file: &str) -> Result<PathBuf> {
    let parsed = url::Url::parse(url).with_context(|| format!("invalid URL: {url}"))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| anyhow::anyhow!("URL missing host: {url}"))?;

    let mut rel = PathBuf::from(sanitize_segment(host));

    let path = parsed.path();
    let mut has_file_segment = false;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        rel.push(sanitize_segment(segment));
        has_file_segment = true;
    }

    if !has_file_segment || path.ends_with('/') {
        rel.push(default_file);
    }

    Ok(rel)
}
