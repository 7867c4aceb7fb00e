//! Landing page handler.

use askama::Template;
use axum::response::Html;
use serde_json::json;

use crate::error::AppError;

/// Template for the landing page.
///
/// Renders `templates/index.html`: a URL form wired to `/api/shorten` and
/// `/api/qr` by `static/scripts/script.js`.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub version: &'static str,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Errors
///
/// Returns 400 Bad Request if the template fails to render.
pub async fn home_handler() -> Result<Html<String>, AppError> {
    let page = IndexTemplate {
        version: env!("CARGO_PKG_VERSION"),
    };

    page.render().map(Html).map_err(|e| {
        AppError::bad_request(
            "Error While Loading Home Page",
            json!({ "reason": e.to_string() }),
        )
    })
}
