//! Catalog Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::application::dto::request::CreateCourseRequest;
use crate::application::dto::response::{
    CourseDetailResponse, CourseResponse, CreateCourseResponse,
};
use crate::application::services::{CatalogService, CatalogServiceImpl, CreateCourseDto};
use crate::infrastructure::repositories::{PgCourseRepository, PgEnrollmentRepository};
use crate::presentation::http::handlers::map_catalog_error;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Course listing query parameters
#[derive(Debug, Deserialize)]
pub struct CourseListQuery {
    pub category: Option<String>,
}

fn catalog_service(
    state: &AppState,
) -> CatalogServiceImpl<PgCourseRepository, PgEnrollmentRepository> {
    let course_repo = Arc::new(PgCourseRepository::new(state.db.clone()));
    let enrollment_repo = Arc::new(PgEnrollmentRepository::new(state.db.clone()));

    CatalogServiceImpl::new(course_repo, enrollment_repo, state.snowflake.clone())
}

/// List published courses, optionally filtered to one category
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseListQuery>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let service = catalog_service(&state);

    let courses = match query.category.as_deref() {
        Some(category) => service.list_by_category(category).await,
        None => service.list_published().await,
    }
    .map_err(map_catalog_error)?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// List trending courses
pub async fn list_trending(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = catalog_service(&state)
        .list_trending()
        .await
        .map_err(map_catalog_error)?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Get one course with its full detail view
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseDetailResponse>, AppError> {
    let course_id: i64 = course_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid course ID".into()))?;

    let detail = catalog_service(&state)
        .get_by_id(course_id)
        .await
        .map_err(map_catalog_error)?;

    Ok(Json(CourseDetailResponse::from(detail)))
}

/// Create a new course (unpublished)
pub async fn create_course(
    State(state): State<AppState>,
    Json(body): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CreateCourseResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let instructor_id: i64 = body
        .instructor_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid instructor ID".into()))?;

    let request = CreateCourseDto {
        title: body.title,
        description: body.description,
        thumbnail_url: body.thumbnail_url,
        category: body.category,
        level: body.level,
        price: body.price,
        duration: body.duration,
    };

    let course_id = catalog_service(&state)
        .create(instructor_id, request)
        .await
        .map_err(map_catalog_error)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCourseResponse {
            id: course_id.to_string(),
        }),
    ))
}
