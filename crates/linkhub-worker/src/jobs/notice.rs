//! Scheduled expiring-soon notices.

use std::sync::Arc;

use tracing::{debug, error, info};

use linkhub_service::link::LinkService;

/// Surfaces links that will expire within the configured window.
///
/// Notification delivery itself belongs to the UI layer; this job emits a
/// structured notice per link for downstream consumers.
#[derive(Debug)]
pub struct ExpiryNoticeJob {
    /// Link service.
    links: Arc<LinkService>,
    /// Look-ahead window in hours.
    window_hours: i64,
}

impl ExpiryNoticeJob {
    /// Create a new expiry notice job.
    pub fn new(links: Arc<LinkService>, window_hours: i64) -> Self {
        Self {
            links,
            window_hours,
        }
    }

    /// Execute one notice pass. Failures are logged, never propagated.
    pub async fn run(&self) {
        match self.links.expiring_within(self.window_hours).await {
            Ok(expiring) => {
                for link in &expiring {
                    info!(
                        link_id = %link.id,
                        created_by = %link.created_by,
                        expires_at = %link.expires_at,
                        "Shared link expiring soon"
                    );
                }
                debug!(
                    count = expiring.len(),
                    window_hours = self.window_hours,
                    "Expiry notice pass finished"
                );
            }
            Err(e) => {
                error!(error = %e, "Expiry notice pass failed");
            }
        }
    }
}
