//! Repository tests against a live MongoDB.
//!
//! Each test owns a fresh database on the server named by `MONGO_TEST_URL` and
//! returns early when the variable is unset.

use mongodb::bson::{doc, oid::ObjectId, Document};
use test_utils::{builder::TestBuilder, context::TestContext, error::TestError};

use crate::{
    model::flight::FlightCategory,
    server::{
        config::COLLECTION_NAME,
        data::{
            document::FlightDocument,
            flight::{FlightRepository, FlightStore},
        },
        model::flight::{FlightParams, Passenger},
    },
};

mod insert;
mod replace;

fn repository(test: &TestContext) -> FlightRepository {
    FlightRepository::new(test.collection::<FlightDocument>(COLLECTION_NAME))
}

fn passenger(id: i64, age: i64, flight_category: FlightCategory) -> Passenger {
    Passenger {
        id,
        name: format!("Passenger {}", id),
        has_connections: id % 2 == 0,
        age,
        flight_category,
        reservation_id: format!("R{}", id),
        has_checked_baggage: true,
    }
}

fn params(flight_code: &str, passengers: Vec<Passenger>) -> FlightParams {
    FlightParams {
        flight_code: flight_code.to_string(),
        passengers,
    }
}
