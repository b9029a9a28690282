//! Passenger factory for building passenger objects.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for passenger objects with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::passenger::PassengerFactory;
///
/// let passenger = PassengerFactory::new()
///     .name("Ann")
///     .age(34)
///     .category("Gold")
///     .build();
/// ```
#[derive(Clone)]
pub struct PassengerFactory {
    id: i64,
    name: String,
    has_connections: bool,
    age: i64,
    flight_category: String,
    reservation_id: String,
    has_checked_baggage: bool,
}

impl PassengerFactory {
    /// Creates a new PassengerFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - name: `"Passenger {id}"`
    /// - has_connections: `false`
    /// - age: `30`
    /// - flight_category: `"Normal"`
    /// - reservation_id: `"R{id}"`
    /// - has_checked_baggage: `false`
    pub fn new() -> Self {
        let id = next_id() as i64;
        Self {
            id,
            name: format!("Passenger {}", id),
            has_connections: false,
            age: 30,
            flight_category: "Normal".to_string(),
            reservation_id: format!("R{}", id),
            has_checked_baggage: false,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn has_connections(mut self, has_connections: bool) -> Self {
        self.has_connections = has_connections;
        self
    }

    pub fn age(mut self, age: i64) -> Self {
        self.age = age;
        self
    }

    /// Sets the flight category label.
    ///
    /// Accepts any string so tests can also build payloads with invalid categories.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.flight_category = category.into();
        self
    }

    pub fn reservation_id(mut self, reservation_id: impl Into<String>) -> Self {
        self.reservation_id = reservation_id.into();
        self
    }

    pub fn has_checked_baggage(mut self, has_checked_baggage: bool) -> Self {
        self.has_checked_baggage = has_checked_baggage;
        self
    }

    /// Builds the passenger JSON object.
    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "hasConnections": self.has_connections,
            "age": self.age,
            "flightCategory": self.flight_category,
            "reservationId": self.reservation_id,
            "hasCheckedBaggage": self.has_checked_baggage,
        })
    }
}

impl Default for PassengerFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a passenger object with default values.
///
/// Shorthand for `PassengerFactory::new().build()`.
pub fn create_passenger() -> Value {
    PassengerFactory::new().build()
}
