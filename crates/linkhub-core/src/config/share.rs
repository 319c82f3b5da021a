//! Shared-link policy configuration.

use serde::{Deserialize, Serialize};

/// Shared-link issuing and retention policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Public base URL prefixed to every derived share URL
    /// (`<public_base_url>/shared/<token>`).
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Length of generated share tokens in alphanumeric symbols.
    #[serde(default = "default_token_length")]
    pub token_length: usize,
    /// Maximum number of entries retained in the global access log.
    /// Insertion beyond the cap evicts the oldest entries first.
    #[serde(default = "default_access_log_cap")]
    pub access_log_cap: usize,
    /// Window in hours used by the expiring-soon notice job.
    #[serde(default = "default_expiring_soon_hours")]
    pub expiring_soon_hours: i64,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
            token_length: default_token_length(),
            access_log_cap: default_access_log_cap(),
            expiring_soon_hours: default_expiring_soon_hours(),
        }
    }
}

fn default_public_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_token_length() -> usize {
    32
}

fn default_access_log_cap() -> usize {
    100
}

fn default_expiring_soon_hours() -> i64 {
    24
}
