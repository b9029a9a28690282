use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Passenger tier used for stats aggregation.
///
/// Serialized with the exact variant names (`"Black"`, `"Platinum"`, `"Gold"`,
/// `"Normal"`) both on the wire and in the store.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Eq, Clone, Copy, Debug)]
pub enum FlightCategory {
    Black,
    Platinum,
    Gold,
    Normal,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PassengerDto {
    pub id: i64,
    pub name: String,
    pub has_connections: bool,
    pub age: i64,
    pub flight_category: FlightCategory,
    pub reservation_id: String,
    pub has_checked_baggage: bool,
}

/// Request body for creating or fully replacing a flight.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FlightPayloadDto {
    pub flight_code: String,
    pub passengers: Vec<PassengerDto>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    /// Hex string form of the stored document identifier.
    pub id: String,
    pub flight_code: String,
    pub passengers: Vec<PassengerDto>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct AgeStatsDto {
    pub average: f64,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CategoryDistributionDto {
    #[serde(rename = "Black")]
    pub black: u64,
    #[serde(rename = "Platinum")]
    pub platinum: u64,
    #[serde(rename = "Gold")]
    pub gold: u64,
    #[serde(rename = "Normal")]
    pub normal: u64,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FlightStatsDto {
    pub flight_code: String,
    pub total_passengers: u64,
    pub age_stats: AgeStatsDto,
    pub category_distribution: CategoryDistributionDto,
}
