//! # linkhub-entity
//!
//! Domain entity models for LinkHub: the shared link record, its lifecycle
//! status and origin enums, the expiration option policy, and the access
//! log entry.

pub mod access;
pub mod link;

pub use access::AccessLogEntry;
pub use link::{ExpirationOption, LinkOrigin, LinkStatus, LinkUpdate, SharedLink};
