use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::health;
use super::AppState;
use crate::middleware::{preflight_origin_guard, request_id_middleware};

/// Create application router
pub fn create_router(state: Arc<AppState>) -> axum::Router {
    let cors = cors_layer(&state.allowed_origins);

    // No fallback: unknown paths get axum's default 404
    axum::Router::new()
        .route("/health", get(health::health_check))
        .layer(cors)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            preflight_origin_guard,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the credentialed CORS policy for the given origins.
///
/// Browsers refuse `*` for methods and headers when credentials are allowed,
/// so "allow all" is expressed by mirroring what the preflight asks for.
/// A `*` origin is mirrored the same way, which admits every origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.iter().any(|o| o == "*") {
        tracing::warn!("Wildcard CORS origin with credentials: every origin is allowed");
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin = %origin, "Ignoring unusable CORS origin: {}", e);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
