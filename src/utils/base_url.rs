//! Base URL resolution for absolute short links.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};

/// Resolves the base URL that short codes are appended to.
///
/// Uses the configured override when present, otherwise `http://` plus the
/// request host (port included). The host comes from the `Host` header, or
/// from the request URI authority when the header is absent, as with HTTP/2
/// requests that only carry `:authority`. A trailing slash is removed so the
/// short link is always `<base>/<code>`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no override is configured and:
/// - Neither a `Host` header nor a URI authority is present
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:3000".parse().unwrap());
/// let uri = Uri::from_static("/api/shorten");
///
/// assert_eq!(resolve_base_url(None, &headers, &uri).unwrap(), "http://localhost:3000");
/// assert_eq!(resolve_base_url(Some("https://s.io/"), &headers, &uri).unwrap(), "https://s.io");
/// ```
pub fn resolve_base_url(
    base_url_override: Option<&str>,
    headers: &HeaderMap,
    uri: &Uri,
) -> Result<String, AppError> {
    if let Some(base_url) = base_url_override {
        return Ok(base_url.trim_end_matches('/').to_string());
    }

    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?,
        None => uri
            .authority()
            .map(|authority| authority.as_str())
            .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?,
    };

    Ok(format!("http://{}", host.trim_end_matches('/')))
}

/// Joins a base URL and a short code.
pub fn short_url(base_url: &str, code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), code)
}
