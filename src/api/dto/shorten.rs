//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortenedLink;

/// Request body carrying a single URL.
///
/// Shared by `POST /api/shorten` and `POST /api/qr`. The URL is not
/// validated; a missing scheme is added only when shortening.
#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
}

impl From<ShortenedLink> for ShortenResponse {
    fn from(link: ShortenedLink) -> Self {
        Self {
            short_url: link.short_url,
            original_url: link.original_url,
            short_code: link.code,
        }
    }
}
