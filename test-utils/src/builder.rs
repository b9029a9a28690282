use mongodb::Client;

use crate::{context::TestContext, error::TestError, factory::helpers::next_id};

/// Environment variable naming the MongoDB server used by store-backed tests.
pub const MONGO_TEST_URL_VAR: &str = "MONGO_TEST_URL";

/// Builder for creating test contexts backed by a private MongoDB database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let Some(test) = TestBuilder::new()
///     .with_database_name("flights_repository_insert")
///     .build()
///     .await?
/// else {
///     return Ok(());
/// };
/// ```
pub struct TestBuilder {
    /// Name of the database created for the test.
    ///
    /// Defaults to a name derived from the process id and a counter so that
    /// concurrent test binaries never collide.
    database_name: String,
}

impl TestBuilder {
    /// Creates a new test builder with a generated database name.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            database_name: format!("flight_manifest_test_{}_{}", std::process::id(), next_id()),
        }
    }

    /// Overrides the generated database name.
    ///
    /// # Arguments
    /// - `name` - Database name to use
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = name.into();
        self
    }

    /// Builds the test context.
    ///
    /// Reads `MONGO_TEST_URL` and creates a client for it. The driver connects lazily,
    /// so an unreachable server surfaces on the first operation rather than here.
    ///
    /// # Returns
    /// - `Ok(Some(TestContext))` - Context ready for use
    /// - `Ok(None)` - `MONGO_TEST_URL` is not set; a skip notice naming the database
    ///   is printed to stderr and the caller should return early
    /// - `Err(TestError::Mongo)` - The connection string could not be parsed
    pub async fn build(self) -> Result<Option<TestContext>, TestError> {
        let Ok(url) = std::env::var(MONGO_TEST_URL_VAR) else {
            eprintln!("{}", self.skip_notice());
            return Ok(None);
        };

        let client = Client::with_uri_str(&url).await?;

        Ok(Some(TestContext::new(client, &self.database_name)))
    }
}

impl TestBuilder {
    fn skip_notice(&self) -> String {
        format!(
            "SKIPPED: {} is not set, MongoDB-backed test using database `{}` did not run",
            MONGO_TEST_URL_VAR, self.database_name
        )
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
