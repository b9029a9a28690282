//! Factory methods for building test payloads.
//!
//! Factories produce `serde_json::Value` request bodies in the exact wire format the
//! API accepts, with sensible defaults, reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Flight with one default passenger
//! let body = factory::create_flight_payload();
//!
//! // Customized flight
//! let body = factory::flight::FlightFactory::new()
//!     .flight_code("AB123")
//!     .passenger(factory::passenger::PassengerFactory::new().age(34).category("Gold"))
//!     .build();
//! ```
//!
//! # Available Factories
//!
//! - `flight` - Flight payloads (`flightCode` + `passengers`)
//! - `passenger` - Passenger objects embedded in flight payloads
//! - `helpers` - Shared id generation

pub mod flight;
pub mod helpers;
pub mod passenger;

pub use flight::create_flight_payload;
pub use passenger::create_passenger;
