use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

/// Database holding the flight collection.
pub const DATABASE_NAME: &str = "flight_management";
/// Collection holding one document per flight.
pub const COLLECTION_NAME: &str = "flights";

const DEFAULT_MONGO_URL: &str = "mongodb://mongodb:27017";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

pub struct Config {
    pub mongo_url: String,
    pub bind_address: SocketAddr,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Both variables are optional; `MONGO_URL` falls back to the compose-network
    /// MongoDB address and `BIND_ADDRESS` to port 8000 on all interfaces.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration loaded
    /// - `Err(AppError::ConfigErr)` - `BIND_ADDRESS` is not a valid socket address
    pub fn from_env() -> Result<Self, AppError> {
        let mongo_url =
            std::env::var("MONGO_URL").unwrap_or_else(|_| DEFAULT_MONGO_URL.to_string());

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = parse_bind_address(&bind_address)?;

        Ok(Self {
            mongo_url,
            bind_address,
        })
    }
}

fn parse_bind_address(value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "BIND_ADDRESS".to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
