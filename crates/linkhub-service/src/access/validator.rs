//! Share token validation.

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use linkhub_core::error::AppError;
use linkhub_entity::link::{LinkStatus, LinkUpdate, SharedLink};
use linkhub_store::adapter::LinkStore;
use linkhub_store::provider::StoreManager;

use crate::link::lifecycle;
use crate::link::token::extract_token;

/// Why a presented token does not grant access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// No link carries this token.
    NotFound,
    /// The link passed its expiry instant.
    Expired,
    /// The link was explicitly revoked.
    Revoked,
    /// The link exists but its status grants no access.
    Unavailable,
}

impl InvalidReason {
    /// Stable string form of the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Expired => "expired",
            Self::Revoked => "revoked",
            Self::Unavailable => "unavailable",
        }
    }
}

/// Discriminated result of validating a presented token.
///
/// Malformed or unknown tokens are an `Invalid` outcome, never an error;
/// `Err` is reserved for store I/O failure.
#[derive(Debug, Clone)]
pub enum ValidationOutcome {
    /// The token currently grants access to this link.
    Valid(SharedLink),
    /// The token grants no access.
    Invalid(InvalidReason),
}

impl ValidationOutcome {
    /// Whether the outcome grants access.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Decides whether a presented token currently grants access.
#[derive(Debug, Clone)]
pub struct AccessValidator {
    /// Persisted link store.
    store: Arc<StoreManager>,
}

impl AccessValidator {
    /// Creates a new access validator.
    pub fn new(store: Arc<StoreManager>) -> Self {
        Self { store }
    }

    /// Validate a presented token.
    ///
    /// The token may be a bare id, the trailing segment of a share URL, or
    /// a full URL; lookup matches the embedded id exactly. The link passes
    /// through the lazy lifecycle transition first, and a resulting
    /// `Expired` status is written through to the store before returning.
    pub async fn validate(&self, token: &str) -> Result<ValidationOutcome, AppError> {
        let links = self.store.load_all_links().await?;
        let needle = extract_token(token);
        let Some(mut link) = links.into_iter().find(|l| l.id == needle) else {
            return Ok(ValidationOutcome::Invalid(InvalidReason::NotFound));
        };

        let effective = lifecycle::effective_status(&link, Utc::now());
        if effective != link.status {
            // Write-through memoization; the outcome does not depend on
            // this write succeeding.
            if let Err(e) = self
                .store
                .update_link_by_id(&link.id, LinkUpdate::status(effective))
                .await
            {
                warn!(link_id = %link.id, error = %e, "Failed to persist expiry transition");
            }
            link.status = effective;
        }

        Ok(match effective {
            LinkStatus::Active => ValidationOutcome::Valid(link),
            LinkStatus::Expired => ValidationOutcome::Invalid(InvalidReason::Expired),
            LinkStatus::Revoked => ValidationOutcome::Invalid(InvalidReason::Revoked),
            LinkStatus::Unknown => ValidationOutcome::Invalid(InvalidReason::Unavailable),
        })
    }
}
