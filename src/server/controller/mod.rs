//! HTTP request handlers.
//!
//! Controllers extract path and body data, convert DTOs into service parameters,
//! call the service layer and convert domain models back into DTOs.

pub mod extract;
pub mod flight;
pub mod health;
