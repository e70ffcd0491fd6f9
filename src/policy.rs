//! Save/skip decision for a crawled response.
//!
//! Three signals, evaluated in a fixed order: the response-status allow-list,
//! the per-request override, and the configured URL rules. The first signal
//! that decides wins.

use crate::config::StorageConfig;
use crate::page::{CrawlRequest, CrawlResponse};

/// Decide whether `response`'s body should be persisted.
///
/// Pure function of the configuration, the request's override and URL, and
/// the response status. Never fails; invalid configuration cannot reach this
/// point because patterns are compiled when the config is built.
pub fn should_save(
    config: &StorageConfig,
    request: &impl CrawlRequest,
    response: &impl CrawlResponse,
) -> bool {
    // A status outside the allow-list is never kept, even when the request
    // asks for it explicitly.
    if !config.status_allowed(response.status()) {
        return false;
    }

    // Explicit per-request intent overrides the URL rules in both directions.
    if let Some(forced) = request.save_override() {
        return forced;
    }

    config.url_matches(request.url())
}
