use mongodb::{Client, Collection, Database};

use crate::error::TestError;

/// Test context holding a MongoDB client and a database private to one test.
///
/// The database name is unique per context, so tests can run in parallel against
/// the same server without seeing each other's documents.
pub struct TestContext {
    /// Client connected to the server named by `MONGO_TEST_URL`.
    pub client: Client,

    /// Database reserved for this test. Dropped by `teardown()`.
    pub db: Database,
}

impl TestContext {
    /// Creates a test context for the given database.
    ///
    /// # Arguments
    /// - `client` - Connected MongoDB client
    /// - `database_name` - Name of the database this test owns
    ///
    /// # Returns
    /// - New `TestContext` instance
    pub fn new(client: Client, database_name: &str) -> Self {
        let db = client.database(database_name);

        Self { client, db }
    }

    /// Gets a typed handle to a collection in the test database.
    ///
    /// # Arguments
    /// - `name` - Collection name
    ///
    /// # Returns
    /// - `Collection<T>` - Handle; the collection is created on first write
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection::<T>(name)
    }

    /// Drops the test database.
    ///
    /// Call at the end of each test; a test that panics leaves its database behind,
    /// which is harmless because names are never reused.
    ///
    /// # Returns
    /// - `Ok(())` - Database dropped
    /// - `Err(TestError::Mongo)` - Server rejected the drop or is unreachable
    pub async fn teardown(self) -> Result<(), TestError> {
        self.db.drop().await?;

        Ok(())
    }
}
