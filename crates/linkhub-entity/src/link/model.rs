//! Shared link entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a shared link.
///
/// `Active` is the only initial state. `Expired` and `Revoked` are terminal:
/// once a link reaches either, no operation ever returns it to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// The link currently grants access.
    Active,
    /// The link passed its expiry instant.
    Expired,
    /// The link was explicitly revoked by its creator.
    Revoked,
    /// A status value written by a newer release. Grants no access.
    #[serde(other)]
    Unknown,
}

impl LinkStatus {
    /// Whether this status is terminal (no further transitions).
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Expired | Self::Revoked)
    }
}

/// The UI surface from which a share was initiated. Retained for analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkOrigin {
    /// Shared from the home dashboard.
    Home,
    /// Shared from the reports view.
    Reports,
}

/// A shared link granting time-limited, revocable access to scoped report data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedLink {
    /// Opaque token identifying the link. Globally unique, immutable.
    pub id: String,
    /// Identity of the creator, supplied by the caller. Opaque to the core.
    pub created_by: String,
    /// Company IDs scoping the data visible through this link. Non-empty.
    pub company_ids: Vec<String>,
    /// Where the share was initiated.
    pub origin: LinkOrigin,
    /// Caller-defined report filters. Copied verbatim, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Value>,
    /// When the link was created. Immutable.
    pub created_at: DateTime<Utc>,
    /// When the link expires. Fixed at creation, always after `created_at`.
    pub expires_at: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: LinkStatus,
    /// Derived public URL: `<base>/shared/<id>`.
    pub url: String,
    /// Number of successful accesses. Monotonically non-decreasing.
    pub access_count: u64,
}

impl SharedLink {
    /// Whether this link's scope includes the given company.
    pub fn scoped_to(&self, company_id: &str) -> bool {
        self.company_ids.iter().any(|c| c == company_id)
    }

    /// Whether the expiry instant has passed at `now`.
    pub fn expiry_passed(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Partial-fields patch applied to a single link record by
/// `update_link_by_id`. Unset fields are left untouched.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LinkUpdate {
    /// New lifecycle status.
    pub status: Option<LinkStatus>,
    /// New access count.
    pub access_count: Option<u64>,
}

impl LinkUpdate {
    /// Patch that only changes the status.
    pub fn status(status: LinkStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Patch that only changes the access count.
    pub fn access_count(count: u64) -> Self {
        Self {
            access_count: Some(count),
            ..Self::default()
        }
    }

    /// Apply this patch to a link record.
    pub fn apply(&self, link: &mut SharedLink) {
        if let Some(status) = self.status {
            link.status = status;
        }
        if let Some(count) = self.access_count {
            link.access_count = count;
        }
    }
}
