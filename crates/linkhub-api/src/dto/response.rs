//! Response DTOs.

use serde::{Deserialize, Serialize};

use linkhub_entity::link::SharedLink;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Validation outcome for a presented share token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateLinkResponse {
    /// Whether the token currently grants access.
    pub valid: bool,
    /// Why the token grants no access (absent when valid).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The link, when access is granted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<SharedLink>,
}

/// Result of recording an access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAccessResponse {
    /// The link's new access count.
    pub access_count: u64,
}

/// Result of a retention sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResponse {
    /// Number of removed link records.
    pub removed: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Status.
    pub status: String,
    /// Store connectivity.
    pub store: String,
    /// Number of persisted links.
    pub link_count: usize,
}
