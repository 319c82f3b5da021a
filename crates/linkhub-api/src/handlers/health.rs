//! Health check handlers.

use axum::Json;
use axum::extract::State;

use linkhub_store::adapter::LinkStore;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/detailed
pub async fn health_detailed(
    State(state): State<AppState>,
) -> Json<ApiResponse<DetailedHealthResponse>> {
    let (store, link_count) = match state.store.load_all_links().await {
        Ok(links) => ("connected".to_string(), links.len()),
        Err(_) => ("unreachable".to_string(), 0),
    };

    Json(ApiResponse::ok(DetailedHealthResponse {
        status: "ok".to_string(),
        store,
        link_count,
    }))
}
