//! # Domain Entities
//!
//! View values assembled by the catalog read layer. Every value is built
//! fresh per query and owned by the caller that requested it; there is no
//! shared cache behind these types.
//!
//! ## Core Entities
//!
//! - **Course**: summary view used by list operations
//! - **CourseDetail**: fully-joined view used by the single-course read
//! - **EnrolledCourse**: summary view annotated with enrollment progress
//! - **Instructor**: resolved instructor identity with fallback naming
//! - **CourseModule** / **Lesson**: the two-level curriculum tree
//! - **Review**: a student review with resolved reviewer identity
//!
//! ## Repository Traits
//!
//! `CourseRepository` and `EnrollmentRepository` define the persistence
//! contracts. They are implemented in the infrastructure layer, following
//! the dependency inversion principle.

mod course;
mod curriculum;
mod enrollment;
mod instructor;
mod review;

pub use course::{Course, CourseDetail, CourseRepository, EnrolledCourse};
pub use curriculum::{CourseModule, Lesson, LessonKind};
pub use enrollment::{EnrollmentOutcome, EnrollmentRepository};
pub use instructor::Instructor;
pub use review::Review;
