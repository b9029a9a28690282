use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor that reports rejections as `AppError::Validation`.
///
/// Behaves like `axum::Json`, but a body that fails to parse or does not match the
/// target type produces a 422 response with the standard error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
