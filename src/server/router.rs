use axum::{routing::get, Router};

use crate::server::{
    controller::{
        flight::{
            create_flight, delete_flight, get_flight_by_id, get_flight_stats, get_flights,
            update_flight,
        },
        health::{health, root},
    },
    docs::openapi_json,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
        .route("/flights", get(get_flights).post(create_flight))
        .route(
            "/flights/{flight_id}",
            get(get_flight_by_id)
                .put(update_flight)
                .delete(delete_flight),
        )
        .route("/flights/{flight_id}/stats", get(get_flight_stats))
}
