//! Handler for QR code generation.

use axum::{Json, extract::State};

use crate::api::dto::qr::QrResponse;
use crate::api::dto::shorten::UrlRequest;
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Renders a QR code for a URL and returns the image path.
///
/// # Endpoint
///
/// `POST /api/qr`
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "qr_file": "qrcodes/Ab3dE9xY.png" }
/// ```
///
/// The image is served at `/static/<qr_file>`.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed.
/// Returns 500 Internal Server Error if rendering or saving fails.
pub async fn qr_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UrlRequest>,
) -> Result<Json<QrResponse>, AppError> {
    let artifact = state.qr_service.generate(&payload.url).await?;

    Ok(Json(artifact.into()))
}
