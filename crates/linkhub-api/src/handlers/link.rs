//! Shared link CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use linkhub_core::error::AppError;
use linkhub_entity::link::{ExpirationOption, LinkOrigin, SharedLink};

use crate::dto::request::{CompanyScopeQuery, CreateLinkRequest, ExpiringQuery};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/links
pub async fn list_links(
    State(state): State<AppState>,
    Query(params): Query<CompanyScopeQuery>,
) -> Result<Json<ApiResponse<Vec<SharedLink>>>, ApiError> {
    let links = state
        .link_service
        .list_links(params.company_id.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(links)))
}

/// POST /api/links
pub async fn create_link(
    State(state): State<AppState>,
    Json(req): Json<CreateLinkRequest>,
) -> Result<Json<ApiResponse<SharedLink>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))?;

    let origin = parse_origin(&req.origin)?;
    let expiration = ExpirationOption::parse(req.expiration.as_deref().unwrap_or("1d"));

    let link = state
        .link_service
        .create_link(linkhub_service::link::service::CreateLinkRequest {
            created_by: req.created_by,
            company_ids: req.company_ids,
            origin,
            filters: req.filters,
            expiration,
            custom_expiration: req.custom_expiration,
        })
        .await?;

    Ok(Json(ApiResponse::ok(link)))
}

/// GET /api/links/expiring
pub async fn expiring_links(
    State(state): State<AppState>,
    Query(params): Query<ExpiringQuery>,
) -> Result<Json<ApiResponse<Vec<SharedLink>>>, ApiError> {
    let hours = params
        .hours
        .unwrap_or(state.config.share.expiring_soon_hours);
    if hours <= 0 {
        return Err(AppError::validation("hours must be positive").into());
    }

    let links = state.link_service.expiring_within(hours).await?;
    Ok(Json(ApiResponse::ok(links)))
}

/// GET /api/links/{token}
pub async fn get_link(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ApiResponse<SharedLink>>, ApiError> {
    let link = state
        .link_service
        .get_link(&token)
        .await?
        .ok_or_else(|| AppError::not_found("Shared link not found"))?;

    Ok(Json(ApiResponse::ok(link)))
}

/// POST /api/links/{id}/revoke
pub async fn revoke_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let found = state.link_service.revoke_link(&id).await?;
    if !found {
        return Err(AppError::not_found("Shared link not found").into());
    }

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Shared link revoked".to_string(),
    })))
}

/// DELETE /api/links/{id}
pub async fn delete_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let found = state.link_service.delete_link(&id).await?;
    if !found {
        return Err(AppError::not_found("Shared link not found").into());
    }

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Shared link deleted".to_string(),
    })))
}

fn parse_origin(s: &str) -> Result<LinkOrigin, AppError> {
    match s {
        "home" => Ok(LinkOrigin::Home),
        "reports" => Ok(LinkOrigin::Reports),
        _ => Err(AppError::validation(format!("Invalid origin: {s}"))),
    }
}
