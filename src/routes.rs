//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`       - Landing page
//! - `GET  /{code}` - Short link redirect
//! - `/api/*`       - JSON API
//! - `/static/*`    - Static assets and generated QR images
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Static files are served from the QR service's static root, so generated
/// images are reachable at `/static/<qr_file>`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let static_dir = ServeDir::new(state.qr_service.static_root());

    let router = Router::new()
        .merge(web::routes::routes())
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", static_dir)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
