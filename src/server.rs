//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, worker spawning, and Axum server lifecycle.

use crate::config::{Config, StoreBackend};
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::store::{KeyValueStore, MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Opens the configured key-value store.
///
/// # Errors
///
/// Returns an error if the Redis backend is selected and cannot be reached.
/// There is no fallback: the store is the single source of truth.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    match config.store_backend {
        StoreBackend::Redis => {
            let store = RedisStore::connect(&config.redis_url)
                .await
                .context("Failed to connect to Redis")?;
            tracing::info!("Store enabled (Redis)");
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Store enabled (memory); links are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Key-value store
/// - Background click worker
/// - Axum HTTP server with graceful shutdown
///
/// Queued clicks are drained before returning.
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static dir {} does not exist yet; it is created on first QR code",
            config.static_dir.display()
        );
    }

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);

    let state = AppState::new(
        store,
        config.static_dir.clone(),
        config.base_url.clone(),
        click_tx,
    );

    let worker = tokio::spawn(run_click_worker(click_rx, state.stats_service.clone()));
    tracing::info!("Click worker started");

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, draining click queue");
    worker.await.context("Click worker panicked")?;

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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

    tracing::info!("Shutdown signal received");
}
