//! Response DTOs
//!
//! Data structures for API response bodies. Ids are rendered as strings
//! and timestamps as RFC 3339.

use serde::Serialize;

use crate::domain::entities::{
    Course, CourseDetail, CourseModule, EnrolledCourse, EnrollmentOutcome, Instructor, Lesson,
    Review,
};

/// Instructor response
#[derive(Debug, Serialize)]
pub struct InstructorResponse {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub title: String,
    pub courses_count: u32,
    pub students_count: u32,
    pub reviews_count: u32,
}

impl From<Instructor> for InstructorResponse {
    fn from(instructor: Instructor) -> Self {
        Self {
            id: instructor.id,
            name: instructor.name,
            avatar: instructor.avatar,
            title: instructor.title,
            courses_count: instructor.courses_count,
            students_count: instructor.students_count,
            reviews_count: instructor.reviews_count,
        }
    }
}

/// Course summary response
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub category: String,
    pub level: String,
    pub price: f64,
    pub duration: String,
    pub instructor: InstructorResponse,
    pub rating: f64,
    pub reviews_count: u32,
    pub updated_at: String,
    pub is_trending: bool,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.to_string(),
            title: course.title,
            description: course.description,
            thumbnail: course.thumbnail,
            category: course.category,
            level: course.level,
            price: course.price,
            duration: course.duration,
            instructor: InstructorResponse::from(course.instructor),
            rating: course.rating,
            reviews_count: course.reviews_count,
            updated_at: course.updated_at.to_rfc3339(),
            is_trending: course.is_trending,
        }
    }
}

/// Lesson response
#[derive(Debug, Serialize)]
pub struct LessonResponse {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: String,
}

impl From<Lesson> for LessonResponse {
    fn from(lesson: Lesson) -> Self {
        Self {
            title: lesson.title,
            kind: lesson.kind.as_str().to_string(),
            duration: lesson.duration,
        }
    }
}

/// Module response
#[derive(Debug, Serialize)]
pub struct ModuleResponse {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub lessons: Vec<LessonResponse>,
}

impl From<CourseModule> for ModuleResponse {
    fn from(module: CourseModule) -> Self {
        Self {
            id: module.id.to_string(),
            title: module.title,
            duration: module.duration,
            lessons: module.lessons.into_iter().map(LessonResponse::from).collect(),
        }
    }
}

/// Review response
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub reviewer_name: String,
    pub reviewer_avatar: String,
    pub rating: i32,
    pub comment: String,
    pub date: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            reviewer_name: review.reviewer_name,
            reviewer_avatar: review.reviewer_avatar,
            rating: review.rating,
            comment: review.comment,
            date: review.date.to_rfc3339(),
        }
    }
}

/// Course detail response
#[derive(Debug, Serialize)]
pub struct CourseDetailResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub learning_objectives: Vec<String>,
    pub requirements: Vec<String>,
    pub modules: Vec<ModuleResponse>,
    pub total_lessons: u32,
    pub student_reviews: Vec<ReviewResponse>,
}

impl From<CourseDetail> for CourseDetailResponse {
    fn from(detail: CourseDetail) -> Self {
        Self {
            course: CourseResponse::from(detail.course),
            learning_objectives: detail.learning_objectives,
            requirements: detail.requirements,
            modules: detail.modules.into_iter().map(ModuleResponse::from).collect(),
            total_lessons: detail.total_lessons,
            student_reviews: detail
                .student_reviews
                .into_iter()
                .map(ReviewResponse::from)
                .collect(),
        }
    }
}

/// Enrolled course response
#[derive(Debug, Serialize)]
pub struct EnrolledCourseResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub progress: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_accessed_at: Option<String>,
}

impl From<EnrolledCourse> for EnrolledCourseResponse {
    fn from(enrolled: EnrolledCourse) -> Self {
        Self {
            course: CourseResponse::from(enrolled.course),
            progress: enrolled.progress,
            last_accessed_at: enrolled.last_accessed_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Create course response
#[derive(Debug, Serialize)]
pub struct CreateCourseResponse {
    pub id: String,
}

/// Enrollment response
#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub status: EnrollmentOutcome,
}
