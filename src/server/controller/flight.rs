use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        flight::{FlightDto, FlightPayloadDto, FlightStatsDto},
    },
    server::{
        controller::extract::AppJson, error::AppError, model::flight::FlightParams,
        service::flight::FlightService, state::AppState,
    },
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

const FLIGHT_NOT_FOUND: &str = "Flight not found";

/// Create a new flight.
///
/// Stores the flight code and passenger manifest as a new document. Flight codes
/// are not required to be unique.
///
/// # Returns
/// - `200 OK` - Created flight with its generated `id`
/// - `422 Unprocessable Entity` - Body does not match the flight schema
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    post,
    path = "/flights",
    tag = FLIGHT_TAG,
    request_body = FlightPayloadDto,
    responses(
        (status = 200, description = "Successfully created flight", body = FlightDto),
        (status = 422, description = "Invalid flight data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    AppJson(payload): AppJson<FlightPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(state.flights.as_ref())
        .create(FlightParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(flight.into_dto())))
}

/// Get all flights.
///
/// Returns every stored flight in the store's natural order, without pagination.
///
/// # Returns
/// - `200 OK` - List of flights
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    get,
    path = "/flights",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved flights", body = Vec<FlightDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flights(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let flights = FlightService::new(state.flights.as_ref()).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            flights
                .into_iter()
                .map(|f| f.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a specific flight by ID.
///
/// # Returns
/// - `200 OK` - Flight details
/// - `404 Not Found` - No flight has this ID, or the ID is malformed
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    get,
    path = "/flights/{flight_id}",
    tag = FLIGHT_TAG,
    params(
        ("flight_id" = String, Path, description = "Flight ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved flight", body = FlightDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_by_id(
    State(state): State<AppState>,
    Path(flight_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(state.flights.as_ref())
        .get_by_id(&flight_id)
        .await?;

    match flight {
        Some(flight) => Ok((StatusCode::OK, Json(flight.into_dto()))),
        None => Err(AppError::NotFound(FLIGHT_NOT_FOUND.to_string())),
    }
}

/// Update a flight.
///
/// Replaces the flight code and the whole passenger list; nothing from the previous
/// version is merged in. The ID is preserved.
///
/// # Returns
/// - `200 OK` - Flight as stored after the update
/// - `404 Not Found` - No flight has this ID, or the ID is malformed
/// - `422 Unprocessable Entity` - Body does not match the flight schema
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    put,
    path = "/flights/{flight_id}",
    tag = FLIGHT_TAG,
    params(
        ("flight_id" = String, Path, description = "Flight ID (24-character hex)")
    ),
    request_body = FlightPayloadDto,
    responses(
        (status = 200, description = "Successfully updated flight", body = FlightDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 422, description = "Invalid flight data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<String>,
    AppJson(payload): AppJson<FlightPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(state.flights.as_ref())
        .update(&flight_id, FlightParams::from_dto(payload))
        .await?;

    match flight {
        Some(flight) => Ok((StatusCode::OK, Json(flight.into_dto()))),
        None => Err(AppError::NotFound(FLIGHT_NOT_FOUND.to_string())),
    }
}

/// Delete a flight.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No flight has this ID, or the ID is malformed
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    delete,
    path = "/flights/{flight_id}",
    tag = FLIGHT_TAG,
    params(
        ("flight_id" = String, Path, description = "Flight ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Successfully deleted flight", body = MessageDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = FlightService::new(state.flights.as_ref())
        .delete(&flight_id)
        .await?;

    if !deleted {
        return Err(AppError::NotFound(FLIGHT_NOT_FOUND.to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Flight deleted successfully".to_string(),
        }),
    ))
}

/// Get passenger statistics for a flight.
///
/// Reports the passenger count, the average age rounded to one decimal place
/// (0 for an empty manifest) and the number of passengers in each of the four
/// flight categories.
///
/// # Returns
/// - `200 OK` - Flight statistics
/// - `404 Not Found` - No flight has this ID, or the ID is malformed
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    get,
    path = "/flights/{flight_id}/stats",
    tag = FLIGHT_TAG,
    params(
        ("flight_id" = String, Path, description = "Flight ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Successfully computed flight statistics", body = FlightStatsDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_stats(
    State(state): State<AppState>,
    Path(flight_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let stats = FlightService::new(state.flights.as_ref())
        .get_stats(&flight_id)
        .await?;

    match stats {
        Some(stats) => Ok((StatusCode::OK, Json(stats.into_dto()))),
        None => Err(AppError::NotFound(FLIGHT_NOT_FOUND.to_string())),
    }
}
