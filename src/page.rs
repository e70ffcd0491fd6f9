//! Minimal views of the crawling engine's request and response types.
//!
//! The middleware reads a handful of fields per response; these traits are
//! the whole contract, so any engine type can participate through a thin
//! adapter. [`PageRequest`] and [`PageResponse`] are owned implementations
//! for adapters and tests that do not borrow from an engine.

/// Read-only view of the request that produced a response.
pub trait CrawlRequest {
    /// Request URL as seen by the crawler.
    fn url(&self) -> &str;

    /// Per-request save override (the `save_html` metadata key): `None` when
    /// the request carries no explicit intent, `Some(true)` to force-save,
    /// `Some(false)` to force-skip. Absence is distinct from `false`.
    fn save_override(&self) -> Option<bool>;
}

/// Read-only view of a received response.
pub trait CrawlResponse {
    /// HTTP status code.
    fn status(&self) -> u16;

    /// Response body bytes (decoded text or raw payload).
    fn body(&self) -> &[u8];
}

/// Owned request descriptor.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub url: String,
    pub save_override: Option<bool>,
}

impl PageRequest {
    /// Request with no explicit save intent.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            save_override: None,
        }
    }

    /// Attach an explicit save/skip override.
    pub fn with_override(mut self, save: bool) -> Self {
        self.save_override = Some(save);
        self
    }
}

impl CrawlRequest for PageRequest {
    fn url(&self) -> &str {
        &self.url
    }

    fn save_override(&self) -> Option<bool> {
        self.save_override
    }
}

/// Owned response descriptor.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl PageResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl CrawlResponse for PageResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_tri_state() {
        let plain = PageRequest::new("https://example.com/");
        assert_eq!(plain.save_override(), None);

        let forced = PageRequest::new("https://example.com/").with_override(true);
        assert_eq!(forced.save_override(), Some(true));

        let skipped = PageRequest::new("https://example.com/").with_override(false);
        assert_eq!(skipped.save_override(), Some(false));
    }

    #[test]
    fn response_accepts_text_and_bytes() {
        let text = PageResponse::new(200, "<html></html>");
        assert_eq!(text.body(), b"<html></html>");

        let raw = PageResponse::new(200, vec![0u8, 159, 146, 150]);
        assert_eq!(raw.status(), 200);
        assert_eq!(raw.body().len(), 4);
    }
}
