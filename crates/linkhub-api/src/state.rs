//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use linkhub_core::config::AppConfig;
use linkhub_service::access::{AccessRecorder, AccessValidator};
use linkhub_service::analytics::AnalyticsService;
use linkhub_service::link::LinkService;
use linkhub_service::retention::RetentionService;
use linkhub_store::provider::StoreManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Persisted link store (memory or Redis).
    pub store: Arc<StoreManager>,
    /// Link lifecycle service.
    pub link_service: Arc<LinkService>,
    /// Access validator.
    pub access_validator: Arc<AccessValidator>,
    /// Access recorder.
    pub access_recorder: Arc<AccessRecorder>,
    /// Analytics aggregator.
    pub analytics_service: Arc<AnalyticsService>,
    /// Retention sweeper.
    pub retention_service: Arc<RetentionService>,
}
