//! Course view values and repository trait.
//!
//! `Course` is the summary shape used by every list operation;
//! `CourseDetail` is the fully-joined shape returned by the single-course
//! read; `EnrolledCourse` annotates a summary with enrollment progress.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{CourseModule, Instructor, Review};
use crate::domain::records::{CourseDetailRecord, CourseRecord, NewCourseRecord};
use crate::shared::error::AppError;

/// Summary view of a course, as shown in catalog listings.
///
/// `rating` and `reviews_count` are 0 in summary builds: review rows are
/// not joined for list queries, so the list-level aggregate is deferred.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub category: String,
    pub level: String,
    pub price: f64,
    pub duration: String,
    pub instructor: Instructor,
    /// Average review rating, 0.0 when no reviews are joined.
    pub rating: f64,
    pub reviews_count: u32,
    pub updated_at: DateTime<Utc>,
    pub is_trending: bool,
}

/// Detail view of a course, returned by the single-course read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub learning_objectives: Vec<String>,
    pub requirements: Vec<String>,
    pub modules: Vec<CourseModule>,
    /// Sum of each module's lesson count.
    pub total_lessons: u32,
    /// Stored order, most recent first.
    pub student_reviews: Vec<Review>,
}

/// A course the user is enrolled in, with progress annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrolledCourse {
    #[serde(flatten)]
    pub course: Course,
    /// Completion percentage, 0-100.
    pub progress: i32,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

/// Repository trait for course data access operations.
///
/// Read methods return raw joined records; the domain builders turn those
/// into view values. Published/category/trending filters are applied by the
/// storage query, not in memory.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// All published courses, newest `updated_at` first.
    async fn list_published(&self) -> Result<Vec<CourseRecord>, AppError>;

    /// Published courses in a category. Unknown categories yield an empty
    /// collection, not an error.
    async fn list_by_category(&self, category: &str) -> Result<Vec<CourseRecord>, AppError>;

    /// Published courses flagged as trending.
    async fn list_trending(&self) -> Result<Vec<CourseRecord>, AppError>;

    /// One course with its full set of joined sub-records.
    async fn find_detail_by_id(&self, id: i64) -> Result<Option<CourseDetailRecord>, AppError>;

    /// Insert a new course row. The course is created unpublished.
    async fn insert(&self, course: &NewCourseRecord) -> Result<i64, AppError>;
}
