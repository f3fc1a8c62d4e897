use crate::routes::types::HealthResponse;
use axum::Json;

/// Health check endpoint
///
/// Liveness only: touches no state and has no failure path.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
