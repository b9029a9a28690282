//! Service layer between the controllers and the flight store.
//!
//! Services work with domain models rather than DTOs or storage documents. For flights
//! the service owns identifier parsing, so every operation addressed by id treats a
//! malformed identifier the same way as an absent one.

pub mod flight;
