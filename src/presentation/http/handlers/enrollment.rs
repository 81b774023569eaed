//! Enrollment Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::request::EnrollRequest;
use crate::application::dto::response::{EnrolledCourseResponse, EnrollmentResponse};
use crate::application::services::{CatalogService, CatalogServiceImpl};
use crate::infrastructure::repositories::{PgCourseRepository, PgEnrollmentRepository};
use crate::presentation::http::handlers::map_catalog_error;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn catalog_service(
    state: &AppState,
) -> CatalogServiceImpl<PgCourseRepository, PgEnrollmentRepository> {
    let course_repo = Arc::new(PgCourseRepository::new(state.db.clone()));
    let enrollment_repo = Arc::new(PgEnrollmentRepository::new(state.db.clone()));

    CatalogServiceImpl::new(course_repo, enrollment_repo, state.snowflake.clone())
}

/// Enroll a user in a course.
///
/// Responds 200 for both a fresh enrollment and a repeat of the same pair;
/// the operation is idempotent from the caller's point of view.
pub async fn enroll(
    State(state): State<AppState>,
    Json(body): Json<EnrollRequest>,
) -> Result<Json<EnrollmentResponse>, AppError> {
    let user_id: i64 = body
        .user_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid user ID".into()))?;
    let course_id: i64 = body
        .course_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid course ID".into()))?;

    let status = catalog_service(&state)
        .enroll(user_id, course_id)
        .await
        .map_err(map_catalog_error)?;

    Ok(Json(EnrollmentResponse { status }))
}

/// List the courses a user is enrolled in
pub async fn list_user_courses(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<EnrolledCourseResponse>>, AppError> {
    let user_id: i64 = user_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid user ID".into()))?;

    let courses = catalog_service(&state)
        .list_for_user(user_id)
        .await
        .map_err(map_catalog_error)?;

    Ok(Json(
        courses.into_iter().map(EnrolledCourseResponse::from).collect(),
    ))
}
