//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CatalogService**: catalog reads (listings, course detail) and the
//!   two catalog mutations (course creation, enrollment)

pub mod catalog_service;

pub use catalog_service::{
    CatalogError, CatalogService, CatalogServiceImpl, CreateCourseDto,
};
