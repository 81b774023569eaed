//! CORS layer for browser callers of the catalog API.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::CorsSettings;

/// Build the CORS layer from the configured origin list.
///
/// The catalog API only serves GET and POST, so those are the only methods
/// advertised. An empty origin list (or one where nothing parses) falls
/// back to allowing any origin, which suits local development; deployments
/// are expected to configure an explicit list.
pub fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let mut origins = Vec::with_capacity(settings.allowed_origins.len());
    for origin in &settings.allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin"),
        }
    }

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer
            .allow_origin(AllowOrigin::list(origins))
            .max_age(std::time::Duration::from_secs(3600))
    }
}
