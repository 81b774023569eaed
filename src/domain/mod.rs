//! # Domain Layer
//!
//! The domain layer contains the core catalog logic of the server.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: View values handed to callers (Course, Instructor, ...)
//!   and the repository traits that feed them
//! - **records**: Raw joined record shapes returned by the persistence layer
//! - **services**: Pure builders turning records into view values
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Builders never perform I/O and never return partially-built views

pub mod entities;
pub mod records;
pub mod services;

// Re-export commonly used types
pub use entities::*;
