//! In-memory store implementation using the dashmap crate.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use linkhub_core::result::AppResult;
use linkhub_entity::access::AccessLogEntry;
use linkhub_entity::link::{LinkUpdate, SharedLink};

use crate::adapter::LinkStore;
use crate::keys;

/// In-process store provider backed by a dashmap of JSON records.
///
/// Primarily used for development and tests; records do not survive
/// a process restart.
#[derive(Debug, Clone)]
pub struct MemoryLinkStore {
    /// Named JSON records.
    records: Arc<DashMap<String, String>>,
    /// Cap applied to log collections on append.
    log_cap: usize,
}

impl MemoryLinkStore {
    /// Create an empty in-memory store with the given log cap.
    pub fn new(log_cap: usize) -> Self {
        Self {
            records: Arc::new(DashMap::new()),
            log_cap,
        }
    }

    fn read_record<T: serde::de::DeserializeOwned>(&self, key: &str) -> AppResult<Vec<T>> {
        match self.records.get(key) {
            Some(raw) => {
                let parsed = serde_json::from_str(raw.value())?;
                Ok(parsed)
            }
            None => Ok(Vec::new()),
        }
    }

    fn write_record<T: serde::Serialize>(&self, key: &str, value: &[T]) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.records.insert(key.to_string(), raw);
        Ok(())
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn load_all_links(&self) -> AppResult<Vec<SharedLink>> {
        self.read_record(keys::SHARED_LINKS)
    }

    async fn save_all_links(&self, links: &[SharedLink]) -> AppResult<()> {
        self.write_record(keys::SHARED_LINKS, links)
    }

    async fn update_link_by_id(&self, id: &str, update: LinkUpdate) -> AppResult<bool> {
        let mut links: Vec<SharedLink> = self.read_record(keys::SHARED_LINKS)?;
        let Some(link) = links.iter_mut().find(|l| l.id == id) else {
            return Ok(false);
        };
        update.apply(link);
        self.write_record(keys::SHARED_LINKS, &links)?;
        Ok(true)
    }

    async fn append_log_entries(&self, key: &str, entries: &[AccessLogEntry]) -> AppResult<()> {
        let record = keys::log_record(key);
        let mut log: Vec<AccessLogEntry> = self.read_record(&record)?;
        log.extend_from_slice(entries);
        if log.len() > self.log_cap {
            let overflow = log.len() - self.log_cap;
            log.drain(..overflow);
        }
        self.write_record(&record, &log)
    }

    async fn load_log_entries(&self, key: &str) -> AppResult<Vec<AccessLogEntry>> {
        self.read_record(&keys::log_record(key))
    }
}
