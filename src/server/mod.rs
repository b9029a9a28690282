//! Server-side API backend.
//!
//! This module contains the backend implementation for the flight management API,
//! including HTTP endpoints, orchestration, and data access. The backend uses Axum as
//! the web framework and the official MongoDB driver for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Identifier handling and statistics between controllers and data layer
//! - **Data Layer** (`data/`) - Store operations and document-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (flight store handle)
//! - **Startup** (`startup`) - Tracing setup, store connection, shutdown signal
//! - **Router** (`router`) - Axum route configuration
//! - **Docs** (`docs`) - OpenAPI document generation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts the path and body, converts DTOs to params, calls service
//! 3. **Service** parses identifiers and calls the flight store
//! 4. **Data** queries MongoDB, converts documents to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
