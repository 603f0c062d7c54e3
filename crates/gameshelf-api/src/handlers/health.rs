//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/v1/health
///
/// Returns 503 when the store does not answer.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let reachable = match state.database.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            false
        }
    };

    let (status, body) = health_report(reachable, state.database.backend_name());
    (status, Json(body))
}

fn health_report(reachable: bool, backend: &str) -> (StatusCode, ApiResponse<HealthResponse>) {
    let (status, label, database) = if reachable {
        (StatusCode::OK, "ok", "connected")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
    };

    let body = ApiResponse {
        success: reachable,
        data: HealthResponse {
            status: label.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            backend: backend.to_string(),
            database: database.to_string(),
        },
    };
    (status, body)
}
