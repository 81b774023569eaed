//! Course view-model builder.
//!
//! The single place that maps raw course records into view values. List
//! operations use `build_summary`; the single-course read uses
//! `build_detail`; the per-user listing uses `build_enrolled`. All three
//! share the same scalar mapping, so the defaulting rules cannot drift
//! between operations.
//!
//! A record that fails the required-scalar check never yields a
//! partially-built course: the build fails closed with a malformed-record
//! error and the caller decides whether to skip or propagate.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Course, CourseDetail, EnrolledCourse, Review};
use crate::domain::records::{CourseDetailRecord, CourseRecord, ReviewRecord};
use crate::domain::services::{curriculum, instructor_resolver, normalize, rating};
use crate::shared::error::AppError;

/// Fallback display name for reviews without a stored reviewer name.
pub const REVIEWER_FALLBACK_NAME: &str = "Student";

/// Build the summary view used by list operations.
///
/// Review rows are not joined for list queries, so `rating` and
/// `reviews_count` stay at their 0 placeholders here; the detail build is
/// where the real aggregate is computed.
pub fn build_summary(record: &CourseRecord) -> Result<Course, AppError> {
    let title = normalize::required_text(record.title.as_deref(), "title", record.id)?;

    Ok(Course {
        id: record.id,
        title,
        description: normalize::text_or_empty(record.description.as_deref()),
        thumbnail: normalize::text_or_empty(record.thumbnail_url.as_deref()),
        category: normalize::text_or_empty(record.category.as_deref()),
        level: normalize::text_or_empty(record.level.as_deref()),
        price: normalize::number_or_zero(record.price),
        duration: normalize::text_or_empty(record.duration.as_deref()),
        instructor: instructor_resolver::resolve(record.instructor.as_ref(), record.instructor_id),
        rating: 0.0,
        reviews_count: 0,
        updated_at: record.updated_at,
        is_trending: record.is_trending,
    })
}

/// Build the detail view used by the single-course read.
pub fn build_detail(record: &CourseDetailRecord) -> Result<CourseDetail, AppError> {
    let mut course = build_summary(&record.course)?;

    let summary = rating::summarize(&record.reviews);
    course.rating = summary.average;
    course.reviews_count = summary.count;

    let curriculum = curriculum::assemble(&record.modules);

    Ok(CourseDetail {
        course,
        learning_objectives: record.objectives.clone(),
        requirements: record.requirements.clone(),
        modules: curriculum.modules,
        total_lessons: curriculum.total_lessons,
        student_reviews: record.reviews.iter().map(build_review).collect(),
    })
}

/// Build the enrollment-context view: a summary plus progress annotations.
pub fn build_enrolled(
    record: &CourseRecord,
    progress: i32,
    last_accessed_at: Option<DateTime<Utc>>,
) -> Result<EnrolledCourse, AppError> {
    Ok(EnrolledCourse {
        course: build_summary(record)?,
        progress,
        last_accessed_at,
    })
}

fn build_review(record: &ReviewRecord) -> Review {
    Review {
        reviewer_name: instructor_resolver::display_name(
            record.reviewer.as_ref().and_then(|r| r.first_name.as_deref()),
            record.reviewer.as_ref().and_then(|r| r.last_name.as_deref()),
            REVIEWER_FALLBACK_NAME,
        ),
        reviewer_avatar: normalize::text_or_empty(
            record.reviewer.as_ref().and_then(|r| r.avatar_url.as_deref()),
        ),
        rating: record.rating,
        comment: normalize::text_or_empty(record.comment.as_deref()),
        date: record.created_at,
    }
}
