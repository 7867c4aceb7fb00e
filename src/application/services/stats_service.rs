//! Click counting and stats service.

use std::sync::Arc;

use crate::domain::entities::LinkStats;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_valid_short_code;
use serde_json::json;
use tracing::warn;

/// Service for reading and updating click counters.
pub struct StatsService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Records one click for a short code.
    ///
    /// Called by the click worker; redirects never wait on it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn record_click(&self, code: &str) -> Result<i64, AppError> {
        self.repository.increment_clicks(code).await
    }

    /// Retrieves the click report for a short code.
    ///
    /// The counter read is best effort: a missing or non-integer counter, or a
    /// failed read, is reported as `0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for the code or the
    /// code could never have been issued.
    /// Returns [`AppError::Internal`] if the mapping lookup fails.
    pub async fn get_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        if !is_valid_short_code(code) {
            return Err(AppError::not_found("Short URL not found", json!({ "code": code })));
        }

        let original_url = self
            .repository
            .find_url(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))?;

        let clicks = match self.repository.find_clicks(code).await {
            Ok(clicks) => clicks.unwrap_or(0),
            Err(e) => {
                warn!(code = %code, error = %e, "Failed to read click counter, reporting 0");
                0
            }
        };

        Ok(LinkStats {
            code: code.to_string(),
            original_url,
            clicks,
        })
    }
}
