//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the mapping in the store
/// 2. Send a click event to the background worker
/// 3. Return 301 Moved Permanently
///
/// # Click Tracking
///
/// Click events are sent to a bounded channel with `try_send`. If the queue
/// is full or closed the click is dropped and logged; the redirect still
/// succeeds. A mapping that exists always redirects.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error on store errors, or if the stored URL
/// cannot be used as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let original_url = state.link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(original_url.as_str()).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid redirect target",
            json!({ "code": code }),
        )
    })?;

    match state.click_sender.try_send(ClickEvent::new(code.as_str())) {
        Ok(()) => debug!(code = %code, "Click queued"),
        Err(e) => warn!(code = %code, error = %e, "Click dropped"),
    }

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
