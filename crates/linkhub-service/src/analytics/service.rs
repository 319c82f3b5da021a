//! Analytics aggregation service.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use linkhub_core::error::AppError;
use linkhub_entity::access::AccessLogEntry;
use linkhub_entity::link::{LinkOrigin, LinkStatus, SharedLink};
use linkhub_store::adapter::LinkStore;
use linkhub_store::keys;
use linkhub_store::provider::StoreManager;

use crate::link::lifecycle;

/// Number of recent access entries included in a summary.
const RECENT_ACCESS_LIMIT: usize = 10;

/// Link population counts partitioned by lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusCounts {
    /// Links currently granting access.
    pub active: usize,
    /// Links past their expiry instant.
    pub expired: usize,
    /// Explicitly revoked links.
    pub revoked: usize,
}

/// Link population counts partitioned by originating surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OriginCounts {
    /// Links shared from the home dashboard.
    pub home: usize,
    /// Links shared from the reports view.
    pub reports: usize,
}

/// Usage summary over the (optionally company-scoped) link population.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LinkAnalytics {
    /// Counts by lifecycle status.
    pub status_counts: StatusCounts,
    /// Sum of access counts across the scoped population.
    pub total_access_count: u64,
    /// Counts by originating surface.
    pub origin_counts: OriginCounts,
    /// The most recent in-scope access log entries, newest first.
    pub recent_accesses: Vec<AccessLogEntry>,
}

/// Summarizes link population and access history.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    /// Persisted link store.
    store: Arc<StoreManager>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(store: Arc<StoreManager>) -> Self {
        Self { store }
    }

    /// Compute the usage summary, optionally restricted to links whose
    /// scope includes `company_id`.
    ///
    /// The lazy-expiry pass runs over every link before counting so the
    /// status partition is never stale.
    pub async fn analytics(&self, company_id: Option<&str>) -> Result<LinkAnalytics, AppError> {
        let mut links = self.store.load_all_links().await?;
        if lifecycle::apply_expiry_pass(&mut links, Utc::now()) {
            if let Err(e) = self.store.save_all_links(&links).await {
                warn!(error = %e, "Failed to persist lazy expiry transitions");
            }
        }

        let scoped: Vec<&SharedLink> = links
            .iter()
            .filter(|l| company_id.is_none_or(|c| l.scoped_to(c)))
            .collect();

        let mut status_counts = StatusCounts::default();
        let mut origin_counts = OriginCounts::default();
        let mut total_access_count = 0u64;

        for link in &scoped {
            match link.status {
                LinkStatus::Active => status_counts.active += 1,
                LinkStatus::Expired => status_counts.expired += 1,
                LinkStatus::Revoked => status_counts.revoked += 1,
                LinkStatus::Unknown => {}
            }
            match link.origin {
                LinkOrigin::Home => origin_counts.home += 1,
                LinkOrigin::Reports => origin_counts.reports += 1,
            }
            total_access_count += link.access_count;
        }

        let scoped_ids: HashSet<&str> = scoped.iter().map(|l| l.id.as_str()).collect();
        let mut recent_accesses: Vec<AccessLogEntry> = self
            .store
            .load_log_entries(keys::ACCESS_LOG)
            .await?
            .into_iter()
            .filter(|e| scoped_ids.contains(e.link_id.as_str()))
            .collect();
        recent_accesses.sort_by(|a, b| b.accessed_at.cmp(&a.accessed_at));
        recent_accesses.truncate(RECENT_ACCESS_LIMIT);

        Ok(LinkAnalytics {
            status_counts,
            total_access_count,
            origin_counts,
            recent_accesses,
        })
    }
}
