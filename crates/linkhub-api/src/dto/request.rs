//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create shared link request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Creator identity (opaque string).
    #[validate(length(min = 1, message = "created_by is required"))]
    pub created_by: String,
    /// Company IDs scoping the visible data.
    #[serde(default)]
    pub company_ids: Vec<String>,
    /// Originating surface: `"home"` or `"reports"`.
    pub origin: String,
    /// Opaque report filters, copied verbatim.
    pub filters: Option<serde_json::Value>,
    /// Expiration preset: `"2h"`, `"1d"`, `"1w"`, `"1m"`, or `"custom"`.
    /// Unrecognized values fall back to `"1d"`.
    pub expiration: Option<String>,
    /// Absolute expiry instant for the `"custom"` preset.
    pub custom_expiration: Option<DateTime<Utc>>,
}

/// Record access request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAccessRequest {
    /// Free-form origin of the access.
    pub origin: Option<String>,
}

/// Query parameters for company-scoped listings.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyScopeQuery {
    /// Restrict results to links scoping this company.
    pub company_id: Option<String>,
}

/// Query parameters for the expiring-soon listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpiringQuery {
    /// Look-ahead window in hours. Defaults to the configured window.
    pub hours: Option<i64>,
}
