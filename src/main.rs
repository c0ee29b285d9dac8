//! GatePass server entry point.
//!
//! Wires configuration, the entity store, the services, and the HTTP
//! router together and runs the Axum server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use gatepass_core::config::AppConfig;
use gatepass_core::error::AppError;
use gatepass_database::Store;
use gatepass_service::{LogService, PassService, ReportService, UserService};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
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

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("GATEPASS_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&env)
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
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting GatePass v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Connect the entity store ─────────────────────────
    tracing::info!(
        "Connecting to store (provider: {})...",
        config.store.provider
    );
    let store = Store::connect(&config.store).await?;

    tracing::info!("Running store migrations...");
    store.migrate().await?;
    tracing::info!("Store ready");

    // ── Step 2: Initialize services ──────────────────────────────
    let user_service = Arc::new(UserService::new(
        store.users(),
        store.passes(),
        store.logs(),
    ));
    let pass_service = Arc::new(PassService::new(
        store.users(),
        store.passes(),
        store.logs(),
    ));
    let log_service = Arc::new(LogService::new(
        store.users(),
        store.passes(),
        store.logs(),
    ));
    let report_service = Arc::new(ReportService::new(
        store.users(),
        store.passes(),
        store.logs(),
    ));
    tracing::info!("Services initialized");

    // ── Step 3: Build and start HTTP server ──────────────────────
    let app_state = gatepass_api::state::AppState {
        config: Arc::new(config.clone()),
        store: store.clone(),
        user_service,
        pass_service,
        log_service,
        report_service,
    };

    let app = gatepass_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("GatePass server listening on {}", addr);

    // ── Step 4: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    store.close().await;

    tracing::info!("GatePass server shut down gracefully");
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
