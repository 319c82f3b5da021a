//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Background scheduled-task configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the worker is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron schedule for the retention sweep.
    #[serde(default = "default_sweep_schedule")]
    pub sweep_schedule: String,
    /// Cron schedule for the expiring-soon notice pass.
    #[serde(default = "default_notice_schedule")]
    pub notice_schedule: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            sweep_schedule: default_sweep_schedule(),
            notice_schedule: default_notice_schedule(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Daily at 3 AM.
fn default_sweep_schedule() -> String {
    "0 0 3 * * *".to_string()
}

/// Every hour.
fn default_notice_schedule() -> String {
    "0 0 * * * *".to_string()
}
