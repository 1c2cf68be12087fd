//! Mosque Prayer - prayer-time service for the Mashhad mosque dashboard
//!
//! Serves daily prayer times over HTTP from a pre-warmed day cache.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mosque_prayer::api::create_router;
use mosque_prayer::{spawn_prewarm_task, AppState, Config};

/// Main entry point for the prayer-time server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the prayer-day cache
/// 4. Start the background pre-warm task (unless disabled)
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mosque_prayer=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mosque Prayer server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, prewarm={} (back={}, forward={}), refresh_interval={}s",
        config.server_port,
        config.prewarm_on_startup,
        config.prewarm_backfill_days,
        config.prewarm_forward_days,
        config.refresh_interval
    );

    let state = AppState::default();
    info!("Prayer-day cache initialized");

    let prewarm_handle = if config.prewarm_on_startup {
        let handle = spawn_prewarm_task(
            state.cache.clone(),
            config.prewarm_options(),
            config.refresh_interval,
        );
        info!("Background pre-warm task started");
        Some(handle)
    } else {
        info!("Startup pre-warm disabled; days are computed on demand");
        None
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(prewarm_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the pre-warm task and allows graceful shutdown.
async fn shutdown_signal(prewarm_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = prewarm_handle {
        handle.abort();
        warn!("Pre-warm task aborted");
    }
}
