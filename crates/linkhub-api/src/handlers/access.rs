//! Public share access handlers.

use axum::Json;
use axum::extract::{Path, State};

use linkhub_core::error::AppError;
use linkhub_service::access::{InvalidReason, ValidationOutcome};

use crate::dto::request::RecordAccessRequest;
use crate::dto::response::{ApiResponse, RecordAccessResponse, ValidateLinkResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/shared/{token} — validate a presented token.
///
/// The validation outcome is data, not an error: an invalid token yields
/// a 200 with `valid: false` and the discriminated reason.
pub async fn access_shared(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ApiResponse<ValidateLinkResponse>>, ApiError> {
    let outcome = state.access_validator.validate(&token).await?;

    let body = match outcome {
        ValidationOutcome::Valid(link) => ValidateLinkResponse {
            valid: true,
            reason: None,
            link: Some(link),
        },
        ValidationOutcome::Invalid(reason) => ValidateLinkResponse {
            valid: false,
            reason: Some(reason.as_str().to_string()),
            link: None,
        },
    };

    Ok(Json(ApiResponse::ok(body)))
}

/// POST /api/shared/{token}/access — record a successful access.
pub async fn record_access(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(req): Json<RecordAccessRequest>,
) -> Result<Json<ApiResponse<RecordAccessResponse>>, ApiError> {
    let outcome = state.access_validator.validate(&token).await?;
    let link = match outcome {
        ValidationOutcome::Valid(link) => link,
        ValidationOutcome::Invalid(InvalidReason::NotFound) => {
            return Err(AppError::not_found("Shared link not found").into());
        }
        ValidationOutcome::Invalid(reason) => {
            return Err(AppError::conflict(format!(
                "Shared link does not grant access: {}",
                reason.as_str()
            ))
            .into());
        }
    };

    let origin = req.origin.unwrap_or_else(|| "shared".to_string());
    let access_count = state.access_recorder.record_access(&link.id, &origin).await?;

    Ok(Json(ApiResponse::ok(RecordAccessResponse { access_count })))
}
