//! Scheduled retention sweep.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use linkhub_service::retention::RetentionService;

/// Runs the retention sweep on a schedule.
#[derive(Debug)]
pub struct RetentionSweepJob {
    /// Retention service.
    retention: Arc<RetentionService>,
}

impl RetentionSweepJob {
    /// Create a new retention sweep job.
    pub fn new(retention: Arc<RetentionService>) -> Self {
        Self { retention }
    }

    /// Execute one sweep. Failures are logged, never propagated — the
    /// next scheduled run retries naturally.
    pub async fn run(&self) {
        match self.retention.sweep(Utc::now()).await {
            Ok(removed) => {
                info!(removed, "Scheduled retention sweep finished");
            }
            Err(e) => {
                error!(error = %e, "Scheduled retention sweep failed");
            }
        }
    }
}
