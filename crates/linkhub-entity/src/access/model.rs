//! Access log entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One successful access of a shared link.
///
/// Entries live in a single append-only, globally capped collection;
/// insertion beyond the cap evicts the oldest entries first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessLogEntry {
    /// The accessed link's id.
    pub link_id: String,
    /// When the access happened.
    pub accessed_at: DateTime<Utc>,
    /// Free-form origin of the access (e.g. the presenting surface).
    pub origin: String,
}

impl AccessLogEntry {
    /// Create a new entry stamped with the given instant.
    pub fn new(link_id: impl Into<String>, accessed_at: DateTime<Utc>, origin: impl Into<String>) -> Self {
        Self {
            link_id: link_id.into(),
            accessed_at,
            origin: origin.into(),
        }
    }
}
