use axum::Json;

use crate::models::HealthResponse;

/// Health check endpoint, used by liveness probes
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
