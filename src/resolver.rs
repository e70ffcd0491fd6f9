//! Destination-path resolution for stored responses.
//!
//! The middleware only depends on the [`PathResolver`] trait and does not
//! know how an engine lays files out. [`UrlPathResolver`] is a ready-made
//! implementation that mirrors the request URL under a root directory.

use anyhow::Result;
use std::path::PathBuf;

use crate::page::CrawlRequest;
use crate::url_model;

/// Maps a request to the file path its response body is stored at.
///
/// Implementations must yield unique paths for requests whose bodies must
/// not overwrite each other; the storage writer does not synchronize
/// same-path writes.
pub trait PathResolver {
    fn resolve_path(&self, request: &dyn CrawlRequest) -> Result<PathBuf>;
}

/// Resolver that mirrors the URL under `root`:
/// `https://docs.example.com/guide/intro` becomes
/// `<root>/docs.example.com/guide/intro`, with a default file name appended
/// for `/`-terminated paths.
#[derive(Debug, Clone)]
pub struct UrlPathResolver {
    root: PathBuf,
    default_file: String,
}

impl UrlPathResolver {
    /// Resolver rooted at `root`, using `index.html` for directory-like URLs.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            default_file: "index.html".to_string(),
        }
    }

    /// Override the file name used when the URL path ends in `/`.
    pub fn with_default_file(mut self, name: impl Into<String>) -> Self {
        self.default_file = name.into();
        self
    }
}

impl PathResolver for UrlPathResolver {
    fn resolve_path(&self, request: &dyn CrawlRequest) -> Result<PathBuf> {
        let rel = url_model::relative_path_from_url(request.url(), &self.default_file)?;
        Ok(self.root.join(rel))
    }
}
