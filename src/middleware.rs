//! Response-processing hook that stores selected bodies to disk.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::{ConfigError, StorageConfig, StorageSettings};
use crate::page::{CrawlRequest, CrawlResponse};
use crate::policy;
use crate::resolver::PathResolver;
use crate::storage;

/// What [`HtmlStorageMiddleware::process_response`] did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Body written to the given path.
    Saved(PathBuf),
    /// Policy declined; nothing touched the filesystem.
    Skipped,
}

/// Downloader-side hook that persists selected response bodies.
///
/// Holds the compiled configuration and nothing else; a single instance can
/// serve concurrent crawler workers through `&self`.
#[derive(Debug, Clone)]
pub struct HtmlStorageMiddleware {
    config: StorageConfig,
}

impl HtmlStorageMiddleware {
    /// Wrap an already-compiled configuration.
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Compile `settings` and build the middleware. Invalid URL patterns
    /// fail here, before any response is processed.
    pub fn from_settings(settings: &StorageSettings) -> Result<Self, ConfigError> {
        Ok(Self::new(StorageConfig::new(settings)?))
    }

    /// Process one (request, response) pair from the engine.
    ///
    /// Consults the decision policy; a negative decision returns
    /// [`SaveOutcome::Skipped`] without consulting the resolver. On a
    /// positive decision the body is written to the resolved path,
    /// gzip-compressed when configured. Resolver and I/O errors propagate
    /// unmodified to the engine.
    pub fn process_response<R, S>(
        &self,
        request: &R,
        response: &S,
        resolver: &dyn PathResolver,
    ) -> Result<SaveOutcome>
    where
        R: CrawlRequest,
        S: CrawlResponse,
    {
        if !policy::should_save(&self.config, request, response) {
            return Ok(SaveOutcome::Skipped);
        }

        let path = resolver.resolve_path(request)?;
        storage::write_body(&path, response.body(), self.config.gzip_output())?;
        tracing::debug!(
            url = request.url(),
            path = %path.display(),
            gzip = self.config.gzip_output(),
            "stored response body"
        );

        Ok(SaveOutcome::Saved(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{PageRequest, PageResponse};
    use std::cell::Cell;
    use std::path::Path;

    struct FixedResolver {
        path: PathBuf,
        calls: Cell<u32>,
    }

    impl FixedResolver {
        fn new(path: PathBuf) -> Self {
            Self {
                path,
                calls: Cell::new(0),
            }
        }
    }

    impl PathResolver for FixedResolver {
        fn resolve_path(&self, _request: &dyn CrawlRequest) -> Result<PathBuf> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.path.clone())
        }
    }

    #[test]
    fn saves_to_the_resolved_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("pages/response.html");
        let resolver = FixedResolver::new(target.clone());

        let middleware = HtmlStorageMiddleware::from_settings(&StorageSettings::default()).unwrap();
        let request = PageRequest::new("https://example.com/page").with_override(true);
        let response = PageResponse::new(200, "<html>hi</html>");

        let outcome = middleware
            .process_response(&request, &response, &resolver)
            .unwrap();

        assert_eq!(outcome, SaveOutcome::Saved(target.clone()));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "<html>hi</html>");
    }

    #[test]
    fn skipped_responses_never_reach_the_resolver() {
        let resolver = FixedResolver::new(Path::new("/nonexistent/never-written").to_path_buf());

        let middleware = HtmlStorageMiddleware::from_settings(&StorageSettings::default()).unwrap();
        let request = PageRequest::new("https://example.com/page");
        let response = PageResponse::new(200, "body");

        let outcome = middleware
            .process_response(&request, &response, &resolver)
            .unwrap();

        assert_eq!(outcome, SaveOutcome::Skipped);
        assert_eq!(resolver.calls.get(), 0);
    }

    #[test]
    fn resolver_errors_propagate() {
        struct FailingResolver;
        impl PathResolver for FailingResolver {
            fn resolve_path(&self, _request: &dyn CrawlRequest) -> Result<PathBuf> {
                anyhow::bail!("no path for this request")
            }
        }

        let middleware = HtmlStorageMiddleware::from_settings(&StorageSettings::default()).unwrap();
        let request = PageRequest::new("https://example.com/page").with_override(true);
        let response = PageResponse::new(200, "body");

        let err = middleware
            .process_response(&request, &response, &FailingResolver)
            .unwrap_err();
        assert!(err.to_string().contains("no path"));
    }
}
