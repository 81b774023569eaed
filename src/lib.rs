//! # Catalog Server Library
//!
//! This crate provides a course catalog backend with:
//! - Catalog read operations (listings, course detail)
//! - Course creation and idempotent enrollment
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: View values, raw record shapes, repository traits,
//!   and the pure view-model builders
//! - **Application Layer**: The catalog service and DTOs
//! - **Infrastructure Layer**: Database and repository implementations
//! - **Presentation Layer**: HTTP routes and handlers
//!
//! ## Module Structure
//!
//! ```text
//! catalog_server/
//! +-- config/        Configuration management
//! +-- domain/        Entities, records, and view-model builders
//! +-- application/   Catalog service and DTOs
//! +-- infrastructure/ Database and repository implementations
//! +-- presentation/  HTTP routes and handlers
//! +-- shared/        Common utilities (errors, snowflake IDs)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core catalog logic
pub mod domain;

// Application layer - Catalog service
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
