//! Store access layer.
//!
//! This module contains the flight store seam and its MongoDB-backed repository. The
//! repository reads and writes storage documents internally and returns domain models,
//! keeping BSON layout details out of the service layer.

pub mod document;
pub mod flight;
