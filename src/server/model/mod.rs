//! Server-side domain models and parameter types.
//!
//! Domain models are converted from store documents at the repository boundary and
//! transformed to DTOs at the controller boundary, keeping storage and API concerns
//! apart from the service logic.

pub mod flight;
