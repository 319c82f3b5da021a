//! Access recording — capped log append plus access counter increment.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use linkhub_core::error::AppError;
use linkhub_entity::access::AccessLogEntry;
use linkhub_entity::link::LinkUpdate;
use linkhub_store::adapter::LinkStore;
use linkhub_store::keys;
use linkhub_store::provider::StoreManager;

/// Records successful link accesses.
///
/// Invoked only after the validator returned a `Valid` outcome. Both
/// effects — the log append and the counter increment — belong to one
/// logical operation: if either store write fails the whole call errors
/// and neither effect counts as durable.
#[derive(Debug, Clone)]
pub struct AccessRecorder {
    /// Persisted link store.
    store: Arc<StoreManager>,
}

impl AccessRecorder {
    /// Creates a new access recorder.
    pub fn new(store: Arc<StoreManager>) -> Self {
        Self { store }
    }

    /// Record one successful access of a link.
    ///
    /// Appends to the global capped access log and persists the
    /// incremented access count. Returns the new count.
    pub async fn record_access(&self, link_id: &str, origin: &str) -> Result<u64, AppError> {
        let links = self.store.load_all_links().await?;
        let Some(link) = links.iter().find(|l| l.id == link_id) else {
            return Err(AppError::not_found(format!(
                "No shared link with id '{link_id}'"
            )));
        };

        let entry = AccessLogEntry::new(link_id, Utc::now(), origin);
        self.store
            .append_log_entries(keys::ACCESS_LOG, &[entry])
            .await?;

        let next = link.access_count + 1;
        let updated = self
            .store
            .update_link_by_id(link_id, LinkUpdate::access_count(next))
            .await?;
        if !updated {
            return Err(AppError::store(format!(
                "Link '{link_id}' disappeared while recording access"
            )));
        }

        debug!(link_id = %link_id, origin = %origin, access_count = next, "Access recorded");
        Ok(next)
    }
}
