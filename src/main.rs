mod api;
mod app_state;
mod config;
mod core;
mod domain;
mod errors;
mod logging;
mod routes;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::app_state::build_app_state;
use crate::config::GatewayConfig;
use crate::core::client::kube_client::build_kube_client;
use crate::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::load().context("invalid configuration")?;
    let _log_guard = logging::init_logging(&config)?;

    info!("🚀 Starting deploy-gateway");

    // Credentials are resolved once; the client is shared read-only by all handlers.
    let client = build_kube_client(config.dev_mode).await?;
    let app = app_router().with_state(build_app_state(client));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
