//! Route definitions for the LinkHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(link_routes())
        .merge(access_routes())
        .merge(analytics_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Link CRUD and expiring-soon query
fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(handlers::link::list_links))
        .route("/links", post(handlers::link::create_link))
        .route("/links/expiring", get(handlers::link::expiring_links))
        .route("/links/{id}", get(handlers::link::get_link))
        .route("/links/{id}", delete(handlers::link::delete_link))
        .route("/links/{id}/revoke", post(handlers::link::revoke_link))
}

/// Public share access: validate and record
fn access_routes() -> Router<AppState> {
    Router::new()
        .route("/shared/{token}", get(handlers::access::access_shared))
        .route(
            "/shared/{token}/access",
            post(handlers::access::record_access),
        )
}

/// Usage analytics
fn analytics_routes() -> Router<AppState> {
    Router::new().route("/analytics", get(handlers::analytics::get_analytics))
}

/// Admin-only endpoints
fn admin_routes() -> Router<AppState> {
    Router::new().route(
        "/admin/retention/sweep",
        post(handlers::admin::run_retention_sweep),
    )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
