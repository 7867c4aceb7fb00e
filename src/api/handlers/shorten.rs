//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, Uri},
};

use crate::api::dto::shorten::{ShortenResponse, UrlRequest};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::resolve_base_url;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:3000/aB3dE9",
///   "original_url": "https://example.com/page",
///   "short_code": "aB3dE9"
/// }
/// ```
///
/// The short link base is `BASE_URL` when configured, otherwise
/// `http://<Host header>`, falling back to the request URI authority.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON of the expected shape.
/// Returns 500 Internal Server Error if the store write fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    ApiJson(payload): ApiJson<UrlRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let base_url = resolve_base_url(state.base_url.as_deref(), &headers, &uri)?;

    let link = state.link_service.shorten(&payload.url, &base_url).await?;

    Ok(Json(link.into()))
}
