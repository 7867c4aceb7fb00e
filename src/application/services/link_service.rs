//! Link shortening and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, ShortenedLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::base_url::short_url;
use crate::utils::code_generator::{generate_short_code, is_valid_short_code};
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;
use tracing::debug;

/// Service for creating short links and resolving them for redirects.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Shortens a URL.
    ///
    /// The URL gets an `https://` prefix when it lacks an explicit
    /// `http://`/`https://` scheme; nothing else is validated. A fresh
    /// 6-character code is generated and stored with a zeroed click counter.
    ///
    /// # Collisions
    ///
    /// Codes are not checked for uniqueness. A collision overwrites the older
    /// mapping; with 62^6 possible codes this is left to probability.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the random source or the store fails.
    /// The write is not retried.
    pub async fn shorten(&self, url: &str, base_url: &str) -> Result<ShortenedLink, AppError> {
        let original_url = normalize_url(url);
        let code = generate_short_code()?;

        let link = self
            .link_repository
            .create(Link::new(code, original_url))
            .await?;

        debug!(code = %link.code, url = %link.original_url, "Short link created");

        Ok(ShortenedLink {
            short_url: short_url(base_url, &link.code),
            code: link.code,
            original_url: link.original_url,
        })
    }

    /// Resolves a short code to its original URL.
    ///
    /// Has no side effects; click counting is done by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or could never
    /// have been issued; the latter never touches the store.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if !is_valid_short_code(code) {
            return Err(AppError::not_found("Short URL not found", json!({ "code": code })));
        }

        self.link_repository
            .find_url(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::utils::code_generator::{ALPHABET, SHORT_CODE_LENGTH};

    fn echo_create(mock_link_repo: &mut MockLinkRepository) {
        mock_link_repo
            .expect_create()
            .times(1)
            .returning(|link| Ok(link));
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut mock_link_repo = MockLinkRepository::new();
        echo_create(&mut mock_link_repo);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let link = service
            .shorten("https://example.com", "http://localhost:3000")
            .await
            .unwrap();

        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.code.len(), SHORT_CODE_LENGTH);
        assert!(link.code.bytes().all(|b| ALPHABET.contains(&b)));
        assert_eq!(link.short_url, format!("http://localhost:3000/{}", link.code));
    }

    #[tokio::test]
    async fn test_shorten_adds_missing_scheme() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_create()
            .withf(|link| link.original_url == "https://example.com/page")
            .times(1)
            .returning(|link| Ok(link));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let link = service
            .shorten("example.com/page", "https://s.io")
            .await
            .unwrap();

        assert_eq!(link.original_url, "https://example.com/page");
    }

    #[tokio::test]
    async fn test_shorten_keeps_http_scheme() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_create()
            .withf(|link| link.original_url == "http://example.com")
            .times(1)
            .returning(|link| Ok(link));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.shorten("http://example.com", "https://s.io").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_store_failure() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Store error", json!({}))));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.shorten("https://example.com", "https://s.io").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_find_url()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(Some("https://example.com".to_string())));
        mock_link_repo.expect_increment_clicks().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let url = service.resolve("abc123").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_find_url()
            .times(1)
            .returning(|_| Ok(None));
        mock_link_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.resolve("nOpe42").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_malformed_code_skips_store() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_find_url().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        for code in ["clicks:abc123", "abc12", "abc1234", "abc-12", ""] {
            let result = service.resolve(code).await;
            assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
        }
    }

    #[tokio::test]
    async fn test_resolve_store_error() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_find_url()
            .times(1)
            .returning(|_| Err(AppError::internal("Store error", json!({}))));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.resolve("abc123").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
