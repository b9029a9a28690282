use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::{HealthDto, MessageDto};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

/// Reports that the API process is up.
#[utoipa::path(
    get,
    path = "/",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "API is running", body = MessageDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: "Flight Management API is running!".to_string(),
        }),
    )
}

/// Liveness probe.
///
/// Does not touch the store; a healthy response only means the process is serving
/// requests.
#[utoipa::path(
    get,
    path = "/health",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "healthy".to_string(),
        }),
    )
}
