//! Wire types shared by the HTTP API.
//!
//! Request and response DTOs serialized with serde and described for the OpenAPI
//! document with utoipa. These types never carry store-native identifiers.

pub mod api;
pub mod flight;
