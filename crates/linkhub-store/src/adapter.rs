//! Store adapter trait for pluggable persistence backends.

use async_trait::async_trait;

use linkhub_core::result::AppResult;
use linkhub_entity::access::AccessLogEntry;
use linkhub_entity::link::{LinkUpdate, SharedLink};

/// Consumer-side contract over the persisted key-value store.
///
/// Records are serialized as JSON under fixed keys (see [`crate::keys`]).
/// Mutations follow a read-full-record / write-full-record pattern with no
/// locking across callers: interleaved writers resolve last-write-wins.
/// Failures are signaled synchronously; the store never retries on its own.
#[async_trait]
pub trait LinkStore: Send + Sync + std::fmt::Debug + 'static {
    /// Load the full shared-link collection. An empty store yields an
    /// empty vector, never an error.
    async fn load_all_links(&self) -> AppResult<Vec<SharedLink>>;

    /// Replace the full shared-link collection.
    async fn save_all_links(&self, links: &[SharedLink]) -> AppResult<()>;

    /// Apply a partial-fields patch to the link with the given id.
    /// Returns `false` if no such link exists.
    async fn update_link_by_id(&self, id: &str, update: LinkUpdate) -> AppResult<bool>;

    /// Append entries to the named log collection, evicting the oldest
    /// entries first once the provider's cap is exceeded.
    async fn append_log_entries(&self, key: &str, entries: &[AccessLogEntry]) -> AppResult<()>;

    /// Load the named log collection. Missing key yields an empty vector.
    async fn load_log_entries(&self, key: &str) -> AppResult<Vec<AccessLogEntry>>;
}
