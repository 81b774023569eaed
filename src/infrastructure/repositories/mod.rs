//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! - **CourseRepository** - catalog reads (listings, joined detail) and
//!   course creation
//! - **EnrollmentRepository** - enrollment insert and per-user listing

pub mod course_repository;
pub mod enrollment_repository;

pub use course_repository::PgCourseRepository;
pub use enrollment_repository::PgEnrollmentRepository;
