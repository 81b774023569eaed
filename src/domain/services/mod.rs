//! # Domain Services
//!
//! Pure functions that turn raw persistence records into view values.
//! Nothing in this tree performs I/O; everything is deterministic over its
//! inputs, which is what keeps the read layer unit-testable without a
//! database.
//!
//! - **normalize**: required-scalar checks and tolerant scalar defaults
//! - **instructor_resolver**: profile → `Instructor` with fallback naming
//! - **rating**: review count and guarded average
//! - **curriculum**: ordered Module→Lesson assembly with lesson totals
//! - **course_builder**: summary/detail/enrolled course builds composing
//!   the other services

pub mod course_builder;
pub mod curriculum;
pub mod instructor_resolver;
pub mod normalize;
pub mod rating;
