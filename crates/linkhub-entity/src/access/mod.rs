//! Access log entry entity.

pub mod model;

pub use model::AccessLogEntry;
