//! Tiercache - A lightweight in-memory tiered cache server
//!
//! Stores entries across a count-bounded fast tier and a byte-budgeted
//! secondary tier, with LRU demotion and promotion between them.

mod api;
mod cache;
mod config;
mod error;
mod models;

use std::net::SocketAddr;

use tokio::signal;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::{CacheEvent, TieredCache};
use config::Config;

/// Main entry point for the Tiercache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the tiered cache with its event listener wired to tracing
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tiercache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tiercache Server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: fast_capacity={}, secondary_budget_bytes={}, port={}",
        config.fast_capacity, config.secondary_budget_bytes, config.server_port
    );

    // Create the cache; its structured events are forwarded to tracing
    let cache = TieredCache::with_listener(
        config.fast_capacity,
        config.secondary_budget_bytes,
        Some(Box::new(|event| match event {
            CacheEvent::Constructed {
                fast_capacity,
                secondary_budget_bytes,
            } => {
                info!(
                    "Cache constructed: fast_capacity={}, secondary_budget_bytes={}",
                    fast_capacity, secondary_budget_bytes
                );
            }
            CacheEvent::Evicted { key, size_bytes } => {
                debug!("Evicted key {} ({} bytes) from secondary tier", key, size_bytes);
            }
        })),
    );
    let state = AppState::new(cache);

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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
}
