//! Instructor resolution.
//!
//! Builds a total `Instructor` value from a possibly-absent profile record.
//! Every course view carries exactly one instructor; missing profile data
//! degrades to deterministic fallbacks, never to an absent instructor.

use crate::domain::entities::Instructor;
use crate::domain::records::InstructorProfileRecord;
use crate::domain::services::normalize;

/// Fallback display name for instructors without a usable profile name.
pub const INSTRUCTOR_FALLBACK_NAME: &str = "Instructor";

/// Concatenate first and last name with a single space and trim; fall back
/// to the given literal when the result is empty.
pub fn display_name(first: Option<&str>, last: Option<&str>, fallback: &str) -> String {
    let joined = format!(
        "{} {}",
        first.unwrap_or_default().trim(),
        last.unwrap_or_default().trim()
    );
    let name = joined.trim();
    if name.is_empty() {
        fallback.to_string()
    } else {
        name.to_string()
    }
}

/// Resolve the instructor view for a course.
///
/// The id prefers the joined profile's id, then the course's raw instructor
/// reference, then empty. The aggregate counts are fixed at zero here; no
/// aggregation query exists in this layer yet.
pub fn resolve(
    profile: Option<&InstructorProfileRecord>,
    course_instructor_id: Option<i64>,
) -> Instructor {
    let id = profile
        .map(|p| p.id.to_string())
        .or_else(|| course_instructor_id.map(|id| id.to_string()))
        .unwrap_or_default();

    let name = display_name(
        profile.and_then(|p| p.first_name.as_deref()),
        profile.and_then(|p| p.last_name.as_deref()),
        INSTRUCTOR_FALLBACK_NAME,
    );

    Instructor {
        id,
        name,
        avatar: normalize::text_or_empty(profile.and_then(|p| p.avatar_url.as_deref())),
        title: normalize::text_or_empty(profile.and_then(|p| p.title.as_deref())),
        courses_count: 0,
        students_count: 0,
        reviews_count: 0,
    }
}
