//! Flight domain models and parameters.
//!
//! Provides the domain representation of a flight and its embedded passengers,
//! the parameter type shared by create and update operations, and the aggregate
//! statistics computed over a flight's passenger list. Domain models carry the
//! store-native `ObjectId`; it is rendered as a string only when converting to DTOs.

use mongodb::bson::oid::ObjectId;

use crate::{
    model::flight::{
        AgeStatsDto, CategoryDistributionDto, FlightCategory, FlightDto, FlightPayloadDto,
        FlightStatsDto, PassengerDto,
    },
    server::data::document::{FlightDocument, PassengerDocument},
};

/// Passenger embedded in a flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    /// Caller-supplied passenger number, not checked for uniqueness.
    pub id: i64,
    pub name: String,
    pub has_connections: bool,
    pub age: i64,
    pub flight_category: FlightCategory,
    pub reservation_id: String,
    pub has_checked_baggage: bool,
}

impl Passenger {
    /// Converts an embedded passenger document to a domain model at the repository boundary.
    pub fn from_document(document: PassengerDocument) -> Self {
        Self {
            id: document.id,
            name: document.name,
            has_connections: document.has_connections,
            age: document.age,
            flight_category: document.flight_category,
            reservation_id: document.reservation_id,
            has_checked_baggage: document.has_checked_baggage,
        }
    }

    pub fn into_document(self) -> PassengerDocument {
        PassengerDocument {
            id: self.id,
            name: self.name,
            has_connections: self.has_connections,
            age: self.age,
            flight_category: self.flight_category,
            reservation_id: self.reservation_id,
            has_checked_baggage: self.has_checked_baggage,
        }
    }

    pub fn into_dto(self) -> PassengerDto {
        PassengerDto {
            id: self.id,
            name: self.name,
            has_connections: self.has_connections,
            age: self.age,
            flight_category: self.flight_category,
            reservation_id: self.reservation_id,
            has_checked_baggage: self.has_checked_baggage,
        }
    }
}

impl From<PassengerDto> for Passenger {
    fn from(dto: PassengerDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            has_connections: dto.has_connections,
            age: dto.age,
            flight_category: dto.flight_category,
            reservation_id: dto.reservation_id,
            has_checked_baggage: dto.has_checked_baggage,
        }
    }
}

/// Persisted flight with its store identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    /// Store-generated document identifier.
    pub id: ObjectId,
    /// Free-form flight code; several flights may share one.
    pub flight_code: String,
    /// Passenger manifest in insertion order.
    pub passengers: Vec<Passenger>,
}

impl Flight {
    /// Converts a flight document to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `document` - The flight document read from the collection
    ///
    /// # Returns
    /// - `Flight` - The converted domain model
    pub fn from_document(document: FlightDocument) -> Self {
        Self {
            id: document.id,
            flight_code: document.flight_code,
            passengers: document
                .passengers
                .into_iter()
                .map(Passenger::from_document)
                .collect(),
        }
    }

    /// Converts the domain model to the API representation.
    ///
    /// The `ObjectId` becomes its 24-character hex string under `id`.
    pub fn into_dto(self) -> FlightDto {
        FlightDto {
            id: self.id.to_hex(),
            flight_code: self.flight_code,
            passengers: self.passengers.into_iter().map(Passenger::into_dto).collect(),
        }
    }
}

/// Parameters for creating a flight or fully replacing an existing one.
///
/// Both fields are always present; an update overwrites the flight code and the
/// whole passenger list rather than merging.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightParams {
    pub flight_code: String,
    pub passengers: Vec<Passenger>,
}

impl FlightParams {
    pub fn from_dto(dto: FlightPayloadDto) -> Self {
        Self {
            flight_code: dto.flight_code,
            passengers: dto.passengers.into_iter().map(Passenger::from).collect(),
        }
    }

    /// Builds the document stored under `id`.
    pub fn into_document(self, id: ObjectId) -> FlightDocument {
        FlightDocument {
            id,
            flight_code: self.flight_code,
            passengers: self
                .passengers
                .into_iter()
                .map(Passenger::into_document)
                .collect(),
        }
    }
}

/// Passenger counts per flight category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryDistribution {
    pub black: u64,
    pub platinum: u64,
    pub gold: u64,
    pub normal: u64,
}

impl CategoryDistribution {
    /// Counts passengers per category.
    ///
    /// All four categories are always reported, with zero for categories that no
    /// passenger belongs to.
    pub fn from_passengers(passengers: &[Passenger]) -> Self {
        let count = |category: FlightCategory| {
            passengers
                .iter()
                .filter(|p| p.flight_category == category)
                .count() as u64
        };

        Self {
            black: count(FlightCategory::Black),
            platinum: count(FlightCategory::Platinum),
            gold: count(FlightCategory::Gold),
            normal: count(FlightCategory::Normal),
        }
    }

    pub fn total(&self) -> u64 {
        self.black + self.platinum + self.gold + self.normal
    }
}

/// Aggregate statistics over a flight's passenger list.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightStats {
    pub flight_code: String,
    pub total_passengers: u64,
    /// Mean passenger age rounded to one decimal place, `0.0` without passengers.
    pub average_age: f64,
    pub category_distribution: CategoryDistribution,
}

impl FlightStats {
    pub fn from_flight(flight: &Flight) -> Self {
        let total_passengers = flight.passengers.len() as u64;
        let category_distribution = CategoryDistribution::from_passengers(&flight.passengers);

        // Every passenger carries exactly one of the four categories.
        debug_assert_eq!(category_distribution.total(), total_passengers);

        Self {
            flight_code: flight.flight_code.clone(),
            total_passengers,
            average_age: average_age(&flight.passengers),
            category_distribution,
        }
    }

    pub fn into_dto(self) -> FlightStatsDto {
        FlightStatsDto {
            flight_code: self.flight_code,
            total_passengers: self.total_passengers,
            age_stats: AgeStatsDto {
                average: self.average_age,
            },
            category_distribution: CategoryDistributionDto {
                black: self.category_distribution.black,
                platinum: self.category_distribution.platinum,
                gold: self.category_distribution.gold,
                normal: self.category_distribution.normal,
            },
        }
    }
}

fn average_age(passengers: &[Passenger]) -> f64 {
    if passengers.is_empty() {
        return 0.0;
    }

    let sum: f64 = passengers.iter().map(|p| p.age as f64).sum();
    let mean = sum / passengers.len() as f64;

    round_to_tenth(mean)
}

/// Rounds to one decimal place, ties to even on the exact binary value.
///
/// Fixed-precision formatting expands the float exactly before rounding, so
/// `20.25` becomes `20.2` while `20.05` (stored slightly above) becomes `20.1`.
fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
