use crate::server::{
    data::flight::FlightStore,
    error::AppError,
    model::flight::{Flight, FlightParams, FlightStats},
    util::parse::parse_object_id,
};

pub struct FlightService<'a> {
    store: &'a dyn FlightStore,
}

impl<'a> FlightService<'a> {
    pub fn new(store: &'a dyn FlightStore) -> Self {
        Self { store }
    }

    /// Creates a new flight. No duplicate check is made on the flight code.
    pub async fn create(&self, params: FlightParams) -> Result<Flight, AppError> {
        let flight = self.store.insert(params).await?;

        tracing::info!("Created flight {} ({})", flight.id, flight.flight_code);

        Ok(flight)
    }

    /// Gets every stored flight
    pub async fn get_all(&self) -> Result<Vec<Flight>, AppError> {
        Ok(self.store.find_all().await?)
    }

    /// Gets a flight by its public identifier
    /// Returns None if the identifier is malformed or no flight has it
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Flight>, AppError> {
        let Some(id) = parse_object_id(id) else {
            return Ok(None);
        };

        Ok(self.store.find_by_id(id).await?)
    }

    /// Replaces a flight's code and passenger list
    /// Returns the updated flight, or None if the identifier is malformed or unknown
    pub async fn update(
        &self,
        id: &str,
        params: FlightParams,
    ) -> Result<Option<Flight>, AppError> {
        let Some(id) = parse_object_id(id) else {
            return Ok(None);
        };

        let flight = self.store.replace(id, params).await?;

        if flight.is_some() {
            tracing::info!("Updated flight {}", id);
        }

        Ok(flight)
    }

    /// Deletes a flight
    /// Returns true if deleted, false if the identifier is malformed or unknown
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let Some(id) = parse_object_id(id) else {
            return Ok(false);
        };

        let deleted = self.store.delete(id).await?;

        if deleted {
            tracing::info!("Deleted flight {}", id);
        }

        Ok(deleted)
    }

    /// Computes passenger statistics for a flight
    ///
    /// # Returns
    /// - `Ok(Some(FlightStats))`: Count, rounded average age and category distribution
    /// - `Ok(None)`: Identifier is malformed or no flight has it
    /// - `Err(AppError)`: Store error
    pub async fn get_stats(&self, id: &str) -> Result<Option<FlightStats>, AppError> {
        let flight = self.get_by_id(id).await?;

        Ok(flight.as_ref().map(FlightStats::from_flight))
    }
}
