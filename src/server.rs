//! HTTP server initialization and runtime setup.
//!
//! Builds the backend client, resolves the history endpoint, and runs the
//! Axum server until Ctrl-C.

use crate::config::Config;
use crate::infrastructure::backend::HttpBackend;
use crate::infrastructure::net::{discover_local_ipv4, resolve_history_url};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - The listen address is invalid or cannot be bound
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = HttpBackend::build_client(config.backend_timeout())
        .context("Failed to build backend HTTP client")?;

    let history_url = resolve_history_url(config.explicit_api_url.as_deref(), discover_local_ipv4());
    tracing::info!(backend = %config.api_url, history = %history_url, "Backend endpoints resolved");

    let backend = Arc::new(HttpBackend::new(client, &config.api_url, &history_url));
    let state = AppState::from_config(&config, backend);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
