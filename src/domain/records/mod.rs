//! Raw record shapes returned by the persistence layer.
//!
//! These are the boundary contract between the repositories and the domain
//! builders: one primary record plus its optionally-joined sub-records. Any
//! nested field may be absent (the join found nothing) and any legacy
//! scalar may be NULL; the builders decide what is tolerable and what makes
//! a record malformed. Keeping these shapes out of the view types lets the
//! builders stay pure and unit-testable.

use chrono::{DateTime, Utc};

/// An instructor profile row joined onto a course (or absent).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstructorProfileRecord {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub avatar_url: Option<String>,
}

/// A course row with its optionally-joined instructor profile.
///
/// `title` is nullable: legacy imports carried rows without one, and such
/// rows fail the required-scalar check instead of surfacing half-built.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRecord {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub instructor_id: Option<i64>,
    pub is_trending: bool,
    pub updated_at: DateTime<Utc>,
    pub instructor: Option<InstructorProfileRecord>,
}

impl Default for CourseRecord {
    fn default() -> Self {
        Self {
            id: 0,
            title: None,
            description: None,
            thumbnail_url: None,
            category: None,
            level: None,
            price: None,
            duration: None,
            instructor_id: None,
            is_trending: false,
            updated_at: Utc::now(),
            instructor: None,
        }
    }
}

/// A lesson row nested under a module record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LessonRecord {
    pub title: Option<String>,
    pub lesson_type: Option<String>,
    pub duration: Option<String>,
}

/// A curriculum module row with its nested lessons, in storage order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModuleRecord {
    pub id: i64,
    pub title: Option<String>,
    pub duration: Option<String>,
    pub lessons: Vec<LessonRecord>,
}

/// Reviewer identity attached to a review row (or absent).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewerRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// A review row with its optionally-joined reviewer identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub reviewer: Option<ReviewerRecord>,
}

impl Default for ReviewRecord {
    fn default() -> Self {
        Self {
            rating: 0,
            comment: None,
            created_at: Utc::now(),
            reviewer: None,
        }
    }
}

/// Everything the detail read joins for one course.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseDetailRecord {
    pub course: CourseRecord,
    pub objectives: Vec<String>,
    pub requirements: Vec<String>,
    pub modules: Vec<ModuleRecord>,
    pub reviews: Vec<ReviewRecord>,
}

/// An enrollment row with its joined course, when that course resolves.
///
/// `course` is `None` for orphaned enrollments (the course row is gone);
/// the read path drops those with a logged warning.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentRecord {
    pub user_id: i64,
    pub course_id: i64,
    pub progress: i32,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub enrolled_at: DateTime<Utc>,
    pub course: Option<CourseRecord>,
}

/// Insert shape for course creation. Courses are created unpublished and
/// not trending; publishing is a separate operation outside this layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourseRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub instructor_id: i64,
}
