//! Enrollment outcome and repository trait.
//!
//! Enrollments are a mutation-only concern here: the write path inserts a
//! (user, course) row, and the read path lists a user's enrollments with
//! the joined course. At most one row exists per pair; the storage layer's
//! uniqueness constraint enforces that, not this code.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::records::EnrollmentRecord;
use crate::shared::error::AppError;

/// Result of an enrollment insert. Both variants are success-shaped:
/// enrolling twice with the same pair is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentOutcome {
    Enrolled,
    AlreadyEnrolled,
}

/// Repository trait for enrollment data access operations.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Insert an enrollment row. A uniqueness violation on
    /// (user_id, course_id) is reported as `AlreadyEnrolled`, never as an
    /// error.
    async fn insert(&self, user_id: i64, course_id: i64)
        -> Result<EnrollmentOutcome, AppError>;

    /// All enrollment rows for a user, newest first, each with its joined
    /// course record when that course still exists.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<EnrollmentRecord>, AppError>;
}
