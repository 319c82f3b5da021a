//! Retention sweep service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use linkhub_core::error::AppError;
use linkhub_entity::link::{LinkStatus, SharedLink};
use linkhub_store::adapter::LinkStore;
use linkhub_store::provider::StoreManager;

/// Purges links whose retention window has passed.
///
/// Revoked links are retained indefinitely regardless of expiry: their
/// records stay inspectable as an audit trail.
#[derive(Debug, Clone)]
pub struct RetentionService {
    /// Persisted link store.
    store: Arc<StoreManager>,
}

impl RetentionService {
    /// Creates a new retention service.
    pub fn new(store: Arc<StoreManager>) -> Self {
        Self { store }
    }

    /// Delete every link with `expires_at <= now` that is not revoked.
    ///
    /// Returns the number of removed records; an empty store sweeps to zero
    /// without error.
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let links = self.store.load_all_links().await?;
        let before = links.len();

        let kept: Vec<SharedLink> = links
            .into_iter()
            .filter(|l| !(l.expiry_passed(now) && l.status != LinkStatus::Revoked))
            .collect();

        let removed = before - kept.len();
        if removed > 0 {
            self.store.save_all_links(&kept).await?;
            info!(removed, remaining = kept.len(), "Retention sweep complete");
        }
        Ok(removed)
    }
}
