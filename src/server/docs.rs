//! OpenAPI document for the HTTP API.

use axum::Json;
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, MessageDto},
        flight::{
            AgeStatsDto, CategoryDistributionDto, FlightCategory, FlightDto, FlightPayloadDto,
            FlightStatsDto, PassengerDto,
        },
    },
    server::controller::{flight, health},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Flight Management API", version = "1.0.1"),
    paths(
        health::root,
        health::health,
        flight::create_flight,
        flight::get_flights,
        flight::get_flight_by_id,
        flight::update_flight,
        flight::delete_flight,
        flight::get_flight_stats,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        HealthDto,
        FlightCategory,
        PassengerDto,
        FlightPayloadDto,
        FlightDto,
        AgeStatsDto,
        CategoryDistributionDto,
        FlightStatsDto,
    )),
    tags(
        (name = "flight", description = "Flight and passenger manifest management"),
        (name = "service", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
