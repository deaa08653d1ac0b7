//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Schema Layer** (`schema/`) - Input decoding and normalisation, resolver-based output
//! - **Service Layer** (`service/`) - Capability checks, reference checks and write ordering
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, principals and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer authentication
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, auth and pagination settings)
//! - **Startup** (`startup`) - Tracing, database connection and migrations, shutdown signal
//! - **Router** (`router`) - Axum route configuration
//! - **Seed** (`seed`) - Optional demo data
//! - **Util** (`util/`) - Offset/limit pagination
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** authenticates the bearer credential and attaches the principal
//! 3. **Controller** decodes the payload, converts DTOs to params, calls service
//! 4. **Service** checks capabilities and references, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models with relations preloaded
//! 6. **Service** returns domain model to controller
//! 7. **Controller** renders the domain model through its output schema

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod schema;
pub mod seed;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
