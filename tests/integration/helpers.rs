//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use linkhub_api::state::AppState;
use linkhub_core::config::AppConfig;
use linkhub_service::access::{AccessRecorder, AccessValidator};
use linkhub_service::analytics::AnalyticsService;
use linkhub_service::link::LinkService;
use linkhub_service::retention::RetentionService;
use linkhub_store::memory::MemoryLinkStore;
use linkhub_store::provider::StoreManager;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store handle for direct record manipulation
    pub store: Arc<StoreManager>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application backed by the in-memory store
    pub async fn new() -> Self {
        let config = AppConfig::default();

        let store = Arc::new(StoreManager::from_provider(Arc::new(MemoryLinkStore::new(
            config.share.access_log_cap,
        ))));

        let link_service = Arc::new(LinkService::new(
            Arc::clone(&store),
            config.share.token_length,
            config.share.public_base_url.clone(),
        ));
        let access_validator = Arc::new(AccessValidator::new(Arc::clone(&store)));
        let access_recorder = Arc::new(AccessRecorder::new(Arc::clone(&store)));
        let analytics_service = Arc::new(AnalyticsService::new(Arc::clone(&store)));
        let retention_service = Arc::new(RetentionService::new(Arc::clone(&store)));

        let app_state = AppState {
            config: Arc::new(config.clone()),
            store: Arc::clone(&store),
            link_service,
            access_validator,
            access_recorder,
            analytics_service,
            retention_service,
        };

        let router = linkhub_api::router::build_router(app_state);

        Self {
            router,
            store,
            config,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a link through the API and return its JSON record
    pub async fn create_link(&self, company_id: &str, origin: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/links",
                Some(serde_json::json!({
                    "created_by": "test-user",
                    "company_ids": [company_id],
                    "origin": origin,
                    "expiration": "1d",
                })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Link creation failed: {:?}",
            response.body
        );
        response.body["data"].clone()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
