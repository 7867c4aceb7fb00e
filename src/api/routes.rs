//! API route configuration.

use crate::api::handlers::{health_handler, qr_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. No authentication is applied.
///
/// # Endpoints
///
/// - `POST /shorten`      - Create a short link
/// - `POST /qr`           - Render a QR code image
/// - `GET  /stats/{code}` - Click report for a link
/// - `GET  /health`       - Store and click queue health
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/qr", post(qr_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/health", get(health_handler))
}
