//! Usage analytics handlers.

use axum::Json;
use axum::extract::{Query, State};

use linkhub_service::analytics::LinkAnalytics;

use crate::dto::request::CompanyScopeQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/analytics
pub async fn get_analytics(
    State(state): State<AppState>,
    Query(params): Query<CompanyScopeQuery>,
) -> Result<Json<ApiResponse<LinkAnalytics>>, ApiError> {
    let summary = state
        .analytics_service
        .analytics(params.company_id.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(summary)))
}
