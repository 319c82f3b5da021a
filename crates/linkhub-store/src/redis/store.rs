//! Redis store provider implementation.

use async_trait::async_trait;
use redis::AsyncCommands;

use linkhub_core::error::{AppError, ErrorKind};
use linkhub_core::result::AppResult;
use linkhub_entity::access::AccessLogEntry;
use linkhub_entity::link::{LinkUpdate, SharedLink};

use crate::adapter::LinkStore;
use crate::keys;

use super::client::RedisClient;

/// Redis-backed store provider holding JSON records under prefixed keys.
#[derive(Debug, Clone)]
pub struct RedisLinkStore {
    /// Redis client.
    client: RedisClient,
    /// Cap applied to log collections on append.
    log_cap: usize,
}

impl RedisLinkStore {
    /// Create a new Redis store provider.
    pub fn new(client: RedisClient, log_cap: usize) -> Self {
        Self { client, log_cap }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Store, format!("Redis error: {e}"), e)
    }

    async fn read_record<T: serde::de::DeserializeOwned>(&self, key: &str) -> AppResult<Vec<T>> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let raw: Option<String> = conn.get(&full_key).await.map_err(Self::map_err)?;
        match raw {
            Some(raw) => {
                let parsed = serde_json::from_str(&raw)?;
                Ok(parsed)
            }
            None => Ok(Vec::new()),
        }
    }

    async fn write_record<T: serde::Serialize + Sync>(
        &self,
        key: &str,
        value: &[T],
    ) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let raw = serde_json::to_string(value)?;
        let mut conn = self.client.conn_mut();
        let _: () = conn.set(&full_key, raw).await.map_err(Self::map_err)?;
        Ok(())
    }
}

#[async_trait]
impl LinkStore for RedisLinkStore {
    async fn load_all_links(&self) -> AppResult<Vec<SharedLink>> {
        self.read_record(keys::SHARED_LINKS).await
    }

    async fn save_all_links(&self, links: &[SharedLink]) -> AppResult<()> {
        self.write_record(keys::SHARED_LINKS, links).await
    }

    async fn update_link_by_id(&self, id: &str, update: LinkUpdate) -> AppResult<bool> {
        let mut links: Vec<SharedLink> = self.read_record(keys::SHARED_LINKS).await?;
        let Some(link) = links.iter_mut().find(|l| l.id == id) else {
            return Ok(false);
        };
        update.apply(link);
        self.write_record(keys::SHARED_LINKS, &links).await?;
        Ok(true)
    }

    async fn append_log_entries(&self, key: &str, entries: &[AccessLogEntry]) -> AppResult<()> {
        let record = keys::log_record(key);
        let mut log: Vec<AccessLogEntry> = self.read_record(&record).await?;
        log.extend_from_slice(entries);
        if log.len() > self.log_cap {
            let overflow = log.len() - self.log_cap;
            log.drain(..overflow);
        }
        self.write_record(&record, &log).await
    }

    async fn load_log_entries(&self, key: &str) -> AppResult<Vec<AccessLogEntry>> {
        self.read_record(&keys::log_record(key)).await
    }
}
