//! Storage-layer document types.
//!
//! These structs mirror the BSON layout of the `flights` collection exactly. They are
//! never serialized to API responses; see `model::flight` for the wire types.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::flight::FlightCategory;

/// One flight document, passengers embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "flightCode")]
    pub flight_code: String,
    pub passengers: Vec<PassengerDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerDocument {
    pub id: i64,
    pub name: String,
    pub has_connections: bool,
    pub age: i64,
    pub flight_category: FlightCategory,
    pub reservation_id: String,
    pub has_checked_baggage: bool,
}
