//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use linkhub_core::config::store::StoreConfig;
use linkhub_core::error::AppError;
use linkhub_core::result::AppResult;
use linkhub_entity::access::AccessLogEntry;
use linkhub_entity::link::{LinkUpdate, SharedLink};

use crate::adapter::LinkStore;

/// Store manager that wraps the configured store provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner store provider.
    inner: Arc<dyn LinkStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &StoreConfig, log_cap: usize) -> AppResult<Self> {
        let inner: Arc<dyn LinkStore> = match config.provider.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis store provider");
                let client = crate::redis::RedisClient::connect(&config.redis).await?;
                Arc::new(crate::redis::RedisLinkStore::new(client, log_cap))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory store provider");
                Arc::new(crate::memory::MemoryLinkStore::new(log_cap))
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory, redis"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn LinkStore>) -> Self {
        Self { inner: provider }
    }
}

#[async_trait]
impl LinkStore for StoreManager {
    async fn load_all_links(&self) -> AppResult<Vec<SharedLink>> {
        self.inner.load_all_links().await
    }

    async fn save_all_links(&self, links: &[SharedLink]) -> AppResult<()> {
        self.inner.save_all_links(links).await
    }

    async fn update_link_by_id(&self, id: &str, update: LinkUpdate) -> AppResult<bool> {
        self.inner.update_link_by_id(id, update).await
    }

    async fn append_log_entries(&self, key: &str, entries: &[AccessLogEntry]) -> AppResult<()> {
        self.inner.append_log_entries(key, entries).await
    }

    async fn load_log_entries(&self, key: &str) -> AppResult<Vec<AccessLogEntry>> {
        self.inner.load_log_entries(key).await
    }
}
