//! Health check handler.

use axum::Json;
use axum::extract::State;

use gatepass_core::error::AppError;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let healthy = state.store.health_check().await?;
    if !healthy {
        return Err(ApiError(AppError::store_unavailable(
            "Store health check failed",
        )));
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
