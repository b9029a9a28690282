use thiserror::Error;

/// Errors that can occur while setting up or tearing down a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// MongoDB client creation or database operation failed.
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}
