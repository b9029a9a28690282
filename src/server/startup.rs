use std::sync::Arc;

use mongodb::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::{Config, COLLECTION_NAME, DATABASE_NAME},
    data::flight::{FlightRepository, FlightStore},
    error::AppError,
};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` when set, otherwise info for this crate and
/// the HTTP trace layer.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flight_manifest=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Creates the MongoDB client and the flight store on top of it.
///
/// The client is created once for the lifetime of the process and pools its own
/// connections. The driver connects lazily, so an unreachable server shows up as
/// 500 responses rather than a startup failure.
///
/// # Arguments
/// - `config` - Application configuration containing the MongoDB URL
///
/// # Returns
/// - `Ok(Arc<dyn FlightStore>)` - Store over `flight_management.flights`
/// - `Err(AppError::MongoErr)` - The connection string could not be parsed
pub async fn connect_to_flight_store(config: &Config) -> Result<Arc<dyn FlightStore>, AppError> {
    let client = Client::with_uri_str(&config.mongo_url).await?;

    let collection = client.database(DATABASE_NAME).collection(COLLECTION_NAME);

    tracing::info!("Using collection {}.{}", DATABASE_NAME, COLLECTION_NAME);

    Ok(Arc::new(FlightRepository::new(collection)))
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
