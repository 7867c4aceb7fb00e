//! Repository trait for short link data access.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short links and their click counters.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::KvLinkRepository`] - key-value store implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a link together with a zeroed click counter.
    ///
    /// An existing mapping under the same code is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, link: Link) -> Result<Link, AppError>;

    /// Finds the original URL for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_url(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Increments the click counter of a code and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn increment_clicks(&self, code: &str) -> Result<i64, AppError>;

    /// Reads the click counter of a code.
    ///
    /// Returns `Ok(None)` when the counter is missing or does not hold an integer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_clicks(&self, code: &str) -> Result<Option<i64>, AppError>;
}
