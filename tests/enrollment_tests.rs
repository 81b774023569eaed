//! Enrollment tests over in-memory repositories.

mod common;

use chrono::{Duration, Utc};

use catalog_server::application::services::CatalogService;
use catalog_server::domain::entities::EnrollmentOutcome;

use common::{course_record, detail_record, test_service};

#[tokio::test]
async fn test_enroll_twice_is_idempotent() {
    let (service, courses, enrollments) = test_service();
    courses.add_published(detail_record(course_record(1, "Rust", "engineering")));

    let first = service.enroll(7, 1).await.unwrap();
    let second = service.enroll(7, 1).await.unwrap();

    // Both calls succeed; only the outcome variant differs, and exactly
    // one row exists for the pair.
    assert_eq!(first, EnrollmentOutcome::Enrolled);
    assert_eq!(second, EnrollmentOutcome::AlreadyEnrolled);
    assert_eq!(enrollments.count_rows(7, 1), 1);
}

#[tokio::test]
async fn test_enroll_different_pairs_both_insert() {
    let (service, courses, enrollments) = test_service();
    courses.add_published(detail_record(course_record(1, "Rust", "engineering")));
    courses.add_published(detail_record(course_record(2, "SQL", "engineering")));

    assert_eq!(service.enroll(7, 1).await.unwrap(), EnrollmentOutcome::Enrolled);
    assert_eq!(service.enroll(7, 2).await.unwrap(), EnrollmentOutcome::Enrolled);
    assert_eq!(service.enroll(8, 1).await.unwrap(), EnrollmentOutcome::Enrolled);

    assert_eq!(enrollments.count_rows(7, 1), 1);
    assert_eq!(enrollments.count_rows(7, 2), 1);
    assert_eq!(enrollments.count_rows(8, 1), 1);
}

#[tokio::test]
async fn test_list_for_user_carries_progress_annotations() {
    let (service, courses, enrollments) = test_service();
    courses.add_published(detail_record(course_record(1, "Rust", "engineering")));

    let accessed = Utc::now() - Duration::days(1);
    enrollments.add_enrollment(7, 1, 80, Some(accessed));

    let listed = service.list_for_user(7).await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].course.title, "Rust");
    assert_eq!(listed[0].progress, 80);
    assert_eq!(listed[0].last_accessed_at, Some(accessed));
}

#[tokio::test]
async fn test_list_for_user_drops_orphaned_enrollment() {
    let (service, courses, enrollments) = test_service();
    courses.add_published(detail_record(course_record(1, "Kept", "engineering")));

    enrollments.add_enrollment(7, 1, 30, None);
    // Enrollment whose course row no longer exists.
    enrollments.add_enrollment(7, 999, 50, None);

    let listed = service.list_for_user(7).await.unwrap();

    // Length equals total enrollments minus the unresolvable ones.
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].course.title, "Kept");
}

#[tokio::test]
async fn test_list_for_user_drops_malformed_course() {
    let (service, courses, enrollments) = test_service();

    let mut malformed = course_record(1, "ignored", "engineering");
    malformed.title = None;
    courses.add_published(detail_record(malformed));
    courses.add_published(detail_record(course_record(2, "Valid", "engineering")));

    enrollments.add_enrollment(7, 1, 10, None);
    enrollments.add_enrollment(7, 2, 20, None);

    let listed = service.list_for_user(7).await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].course.title, "Valid");
}

#[tokio::test]
async fn test_fresh_enrollment_appears_in_user_listing() {
    let (service, courses, _) = test_service();
    courses.add_published(detail_record(course_record(1, "Rust", "engineering")));

    service.enroll(7, 1).await.unwrap();

    let listed = service.list_for_user(7).await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].progress, 0);
    assert!(listed[0].last_accessed_at.is_none());
}

#[tokio::test]
async fn test_other_users_enrollments_are_not_listed() {
    let (service, courses, _) = test_service();
    courses.add_published(detail_record(course_record(1, "Rust", "engineering")));

    service.enroll(7, 1).await.unwrap();

    let listed = service.list_for_user(8).await.unwrap();

    assert!(listed.is_empty());
}
