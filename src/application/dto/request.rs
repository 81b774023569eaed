//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use validator::Validate;

/// Create course request.
///
/// Only required-scalar presence is validated; deeper business rules are
/// not this layer's concern. Courses are created unpublished.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,

    /// Id of the instructor creating the course.
    pub instructor_id: String,
}

/// Enroll request
#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub user_id: String,
    pub course_id: String,
}
