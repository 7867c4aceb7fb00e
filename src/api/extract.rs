//! Request extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejections render as [`AppError`].
///
/// Axum's own `Json` answers with 415 or 422 for some malformed bodies; every
/// rejection from this extractor is a 400 with the standard error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
