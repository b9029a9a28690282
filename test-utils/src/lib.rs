//! Flight Manifest Test Utils
//!
//! Provides shared testing utilities for the flight manifest service. This crate offers a
//! builder for creating test contexts backed by a throwaway MongoDB database, and factories
//! for building flight request payloads.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the MongoDB client and database
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: JSON payload factories for flights and passengers
//!
//! # Usage
//!
//! Store-backed tests need a reachable MongoDB at `MONGO_TEST_URL`. When the variable
//! is unset, `build()` yields `None` and the test should return early:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_flight_operations() -> Result<(), TestError> {
//!     let Some(test) = TestBuilder::new().build().await? else {
//!         return Ok(());
//!     };
//!
//!     let flights = test.collection::<FlightDocument>("flights");
//!     // Perform store operations...
//!
//!     test.teardown().await
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
