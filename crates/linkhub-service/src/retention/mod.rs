//! Retention — permanent removal of links that no longer need retaining.

pub mod service;

pub use service::RetentionService;
