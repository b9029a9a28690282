//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Each failure class has its own variant and its own status code. Not-found and
/// validation failures are expected outcomes of client input; every other variant
/// indicates a problem on the server side.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Prevents the server from starting; if it ever reaches a response it is
    /// reported as 500 Internal Server Error.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// MongoDB driver error.
    ///
    /// Covers connectivity failures, rejected writes and BSON (de)serialization
    /// faults. Results in 500 Internal Server Error with the driver's message as
    /// detail.
    #[error(transparent)]
    MongoErr(#[from] mongodb::error::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message. Malformed
    /// identifiers are reported through this variant as well.
    #[error("{0}")]
    NotFound(String),

    /// Request body rejected before reaching the handler.
    ///
    /// Results in 422 Unprocessable Entity with the extractor's explanation.
    #[error("{0}")]
    Validation(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound` variant
/// - 422 Unprocessable Entity - For `Validation` variant
/// - 500 Internal Server Error - For all other error types (MongoErr, ConfigErr, IoErr)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { detail: msg })).into_response()
            }
            Self::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto { detail: msg }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and reports its message to the client as the `detail` field.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let detail = self.0.to_string();

        tracing::error!("{}", detail);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto { detail }),
        )
            .into_response()
    }
}
