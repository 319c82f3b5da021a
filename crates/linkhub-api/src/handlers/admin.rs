//! Administrative handlers.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::dto::response::{ApiResponse, SweepResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/admin/retention/sweep — run the retention sweep now.
pub async fn run_retention_sweep(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SweepResponse>>, ApiError> {
    let removed = state.retention_service.sweep(Utc::now()).await?;
    Ok(Json(ApiResponse::ok(SweepResponse { removed })))
}
