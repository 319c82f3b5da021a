//! Record key names for all LinkHub store entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every record the application persists.

/// Record key holding the full shared-link collection.
pub const SHARED_LINKS: &str = "shared_links";

/// Record key holding the global capped access log.
pub const ACCESS_LOG: &str = "shared_link_access_log";

/// Build the record key for a named log collection.
pub fn log_record(key: &str) -> String {
    format!("log:{key}")
}
