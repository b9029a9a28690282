//! Flight factory for building flight request payloads.

use serde_json::{json, Value};

use crate::factory::{helpers::next_id, passenger::PassengerFactory};

/// Factory for flight payloads with customizable fields.
///
/// A new factory starts without passengers; add them with `passenger()` or
/// `passengers()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::{flight::FlightFactory, passenger::PassengerFactory};
///
/// let body = FlightFactory::new()
///     .flight_code("AB123")
///     .passenger(PassengerFactory::new().category("Gold"))
///     .build();
/// ```
pub struct FlightFactory {
    flight_code: String,
    passengers: Vec<PassengerFactory>,
}

impl FlightFactory {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - flight_code: `"FL{id}"` where id is auto-incremented
    /// - passengers: empty
    pub fn new() -> Self {
        Self {
            flight_code: format!("FL{}", next_id()),
            passengers: Vec::new(),
        }
    }

    pub fn flight_code(mut self, flight_code: impl Into<String>) -> Self {
        self.flight_code = flight_code.into();
        self
    }

    /// Appends one passenger to the manifest.
    pub fn passenger(mut self, passenger: PassengerFactory) -> Self {
        self.passengers.push(passenger);
        self
    }

    /// Appends several passengers to the manifest, preserving order.
    pub fn passengers(mut self, passengers: impl IntoIterator<Item = PassengerFactory>) -> Self {
        self.passengers.extend(passengers);
        self
    }

    /// Builds the flight JSON payload.
    pub fn build(self) -> Value {
        let passengers: Vec<Value> = self
            .passengers
            .into_iter()
            .map(PassengerFactory::build)
            .collect();

        json!({
            "flightCode": self.flight_code,
            "passengers": passengers,
        })
    }
}

impl Default for FlightFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a flight payload with one default passenger.
pub fn create_flight_payload() -> Value {
    FlightFactory::new().passenger(PassengerFactory::new()).build()
}
