//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/courses", course_routes())
        .nest("/enrollments", enrollment_routes())
        .nest("/users", user_routes())
}

/// Catalog routes
fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::catalog::list_courses))
        .route("/", post(handlers::catalog::create_course))
        .route("/trending", get(handlers::catalog::list_trending))
        .route("/{course_id}", get(handlers::catalog::get_course))
}

/// Enrollment routes
fn enrollment_routes() -> Router<AppState> {
    Router::new().route("/", post(handlers::enrollment::enroll))
}

/// Per-user routes
fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/{user_id}/courses",
        get(handlers::enrollment::list_user_courses),
    )
}
