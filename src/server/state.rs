//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed by
//! the request handlers. The state is initialized once during startup and then cloned
//! for each request handler through Axum's state extraction.

use std::sync::Arc;

use crate::server::data::flight::FlightStore;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: the flight store sits behind an `Arc`, and the MongoDB
/// collection inside the production store shares the driver's connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Flight store used by every flight endpoint.
    ///
    /// Constructed by the process entry point; handlers never open connections
    /// of their own.
    pub flights: Arc<dyn FlightStore>,
}

impl AppState {
    /// Creates a new application state with the provided flight store.
    ///
    /// # Arguments
    /// - `flights` - Flight store shared by all handlers
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(flights: Arc<dyn FlightStore>) -> Self {
        Self { flights }
    }
}
