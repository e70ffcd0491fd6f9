//! Storage settings block and its compiled form.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Settings block an engine embeds in its own configuration file
/// (e.g. a `[storage]` table in TOML). Every field is optional; a missing
/// field keeps its default.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageSettings {
    /// Write bodies through a gzip encoder.
    pub gzip_output: bool,
    /// Response-status allow-list. Empty means every status is eligible.
    pub save_html_on_codes: Vec<u16>,
    /// URL rules as regex strings, matched against the start of the URL.
    pub save_by_url: Vec<String>,
}

/// Invalid settings detected while compiling a [`StorageConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A `save_by_url` entry is not a valid regex.
    #[error("invalid save_by_url pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Compiled storage configuration.
///
/// Built once from [`StorageSettings`]; immutable afterwards. URL rules are
/// compiled here so a bad pattern fails construction instead of surfacing
/// mid-crawl.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    gzip_output: bool,
    save_html_on_codes: Vec<u16>,
    save_by_url: Vec<Regex>,
}

impl StorageConfig {
    /// Compile `settings`. Each URL pattern is anchored at the start of the
    /// subject (`^(?:pattern)`), so rules express prefixes rather than
    /// substring searches.
    pub fn new(settings: &StorageSettings) -> Result<Self, ConfigError> {
        let mut save_by_url = Vec::with_capacity(settings.save_by_url.len());
        for pattern in &settings.save_by_url {
            let re = Regex::new(&format!("^(?:{pattern})")).map_err(|source| {
                ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                }
            })?;
            save_by_url.push(re);
        }

        Ok(Self {
            gzip_output: settings.gzip_output,
            save_html_on_codes: settings.save_html_on_codes.clone(),
            save_by_url,
        })
    }

    /// Whether bodies are written through a gzip encoder.
    pub fn gzip_output(&self) -> bool {
        self.gzip_output
    }

    /// Status gate. An empty allow-list accepts every status.
    pub fn status_allowed(&self, status: u16) -> bool {
        self.save_html_on_codes.is_empty() || self.save_html_on_codes.contains(&status)
    }

    /// First-match scan of the URL rules, in declaration order.
    pub fn url_matches(&self, url: &str) -> bool {
        self.save_by_url.iter().any(|re| re.is_match(url))
    }
}
