//! LinkHub Server — Shared-Link Lifecycle Manager
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use linkhub_core::config::AppConfig;
use linkhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("LINKHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting LinkHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Initialize the link store ────────────────────────
    tracing::info!("Initializing store (provider: {})...", config.store.provider);
    let store = Arc::new(
        linkhub_store::provider::StoreManager::new(&config.store, config.share.access_log_cap)
            .await?,
    );
    tracing::info!("Store initialized");

    // ── Step 2: Initialize services ──────────────────────────────
    let link_service = Arc::new(linkhub_service::link::service::LinkService::new(
        Arc::clone(&store),
        config.share.token_length,
        config.share.public_base_url.clone(),
    ));
    let access_validator = Arc::new(linkhub_service::access::validator::AccessValidator::new(
        Arc::clone(&store),
    ));
    let access_recorder = Arc::new(linkhub_service::access::recorder::AccessRecorder::new(
        Arc::clone(&store),
    ));
    let analytics_service = Arc::new(linkhub_service::analytics::service::AnalyticsService::new(
        Arc::clone(&store),
    ));
    let retention_service = Arc::new(linkhub_service::retention::service::RetentionService::new(
        Arc::clone(&store),
    ));
    tracing::info!("Services initialized");

    // ── Step 3: Shutdown channel ─────────────────────────────────
    let (shutdown_tx, _shutdown_rx) = watch::channel(false);

    // ── Step 4: Start background worker ─────────────────────────
    let scheduler = if config.worker.enabled {
        tracing::info!("Starting background worker...");

        let sweep_job = Arc::new(linkhub_worker::jobs::retention::RetentionSweepJob::new(
            Arc::clone(&retention_service),
        ));
        let notice_job = Arc::new(linkhub_worker::jobs::notice::ExpiryNoticeJob::new(
            Arc::clone(&link_service),
            config.share.expiring_soon_hours,
        ));

        let scheduler = linkhub_worker::scheduler::CronScheduler::new(
            config.worker.clone(),
            sweep_job,
            notice_job,
        )
        .await?;
        scheduler.register_default_tasks().await?;
        scheduler.start().await?;

        tracing::info!("Background worker started");
        Some(scheduler)
    } else {
        tracing::info!("Background worker disabled");
        None
    };

    // ── Step 5: Build and start HTTP server ──────────────────────
    tracing::info!(
        "Starting HTTP server on {}:{}...",
        config.server.host,
        config.server.port
    );

    let app_state = linkhub_api::state::AppState {
        config: Arc::new(config.clone()),
        store: Arc::clone(&store),
        link_service: Arc::clone(&link_service),
        access_validator: Arc::clone(&access_validator),
        access_recorder: Arc::clone(&access_recorder),
        analytics_service: Arc::clone(&analytics_service),
        retention_service: Arc::clone(&retention_service),
    };

    let app = linkhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("LinkHub server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 7: Stop background tasks ────────────────────────────
    if let Some(mut scheduler) = scheduler {
        if let Err(e) = scheduler.shutdown().await {
            tracing::warn!("Scheduler shutdown error: {}", e);
        }
    }

    tracing::info!("LinkHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
