//! Cron scheduler for periodic maintenance tasks.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing::info;

use linkhub_core::config::worker::WorkerConfig;
use linkhub_core::error::AppError;

use crate::jobs::{ExpiryNoticeJob, RetentionSweepJob};

/// Cron-based scheduler for periodic background tasks.
pub struct CronScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
    /// Retention sweep job.
    retention: Arc<RetentionSweepJob>,
    /// Expiry notice job.
    notice: Arc<ExpiryNoticeJob>,
    /// Worker configuration (cron schedules).
    config: WorkerConfig,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler.
    pub async fn new(
        config: WorkerConfig,
        retention: Arc<RetentionSweepJob>,
        notice: Arc<ExpiryNoticeJob>,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self {
            scheduler,
            retention,
            notice,
            config,
        })
    }

    /// Register all default scheduled tasks.
    pub async fn register_default_tasks(&self) -> Result<(), AppError> {
        self.register_retention_sweep().await?;
        self.register_expiry_notice().await?;

        info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        info!("Cron scheduler shut down");
        Ok(())
    }

    /// Retention sweep on the configured schedule.
    async fn register_retention_sweep(&self) -> Result<(), AppError> {
        let job = Arc::clone(&self.retention);
        let schedule = self.config.sweep_schedule.clone();

        let cron_job = CronJob::new_async(schedule.as_str(), move |_uuid, _lock| {
            let job = Arc::clone(&job);
            Box::pin(async move {
                job.run().await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create retention_sweep schedule: {e}"))
        })?;

        self.scheduler.add(cron_job).await.map_err(|e| {
            AppError::internal(format!("Failed to add retention_sweep schedule: {e}"))
        })?;

        info!(schedule = %schedule, "Registered: retention_sweep");
        Ok(())
    }

    /// Expiry notice pass on the configured schedule.
    async fn register_expiry_notice(&self) -> Result<(), AppError> {
        let job = Arc::clone(&self.notice);
        let schedule = self.config.notice_schedule.clone();

        let cron_job = CronJob::new_async(schedule.as_str(), move |_uuid, _lock| {
            let job = Arc::clone(&job);
            Box::pin(async move {
                job.run().await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create expiry_notice schedule: {e}"))
        })?;

        self.scheduler.add(cron_job).await.map_err(|e| {
            AppError::internal(format!("Failed to add expiry_notice schedule: {e}"))
        })?;

        info!(schedule = %schedule, "Registered: expiry_notice");
        Ok(())
    }
}
