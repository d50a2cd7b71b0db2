//! # autolistd
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Construct the JSON-file repository and the automation service
//! - Build the axum router, optionally with a CORS layer
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on every server-side crate.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use autolist_adapter_http_axum::router;
use autolist_adapter_http_axum::state::AppState;
use autolist_adapter_storage_json::JsonAutomationRepository;
use autolist_app::services::automation_service::AutomationService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Repository
    let automation_repo = JsonAutomationRepository::new(&config.data.file);
    tracing::info!(path = %config.data.file.display(), "serving automations from file");

    // Services
    let automation_service = AutomationService::new(automation_repo);

    // HTTP
    let mut app = router::build(AppState::new(automation_service));
    if let Some(origin) = &config.server.cors_origin {
        let cors = router::cors(origin)
            .with_context(|| format!("invalid CORS origin {origin:?}"))?;
        app = app.layer(cors);
        tracing::info!(%origin, "CORS enabled");
    }

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("autolistd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("autolistd stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
