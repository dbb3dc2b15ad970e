//! User API server.
//!
//! Loads configuration, picks a store backend, and serves the user
//! routes until ctrl-c or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};

use user_api::config::Config;
use user_api::db::{self, DbError};
use user_api::routes;
use user_api::state::{AppState, SharedStore, StoreBackend};
use user_api::store::{MemoryUserStore, PgUserStore};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let (store, backend) = match build_store(&config).await {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize the user store");
            std::process::exit(1);
        }
    };

    let state = AppState::new(store, backend);
    let app = routes::router(state).layer(configure_cors(&config));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!(%addr, backend = backend.as_str(), "server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("server shutdown complete");
}

/// Selects the store backend: Postgres when `DATABASE_URL` is set, the
/// in-memory store otherwise.
async fn build_store(config: &Config) -> Result<(SharedStore, StoreBackend), DbError> {
    match &config.database_url {
        Some(url) => {
            if let Some(masked) = config.database_url_masked() {
                tracing::info!(database = %masked, "connecting to Postgres");
            }
            let pool = db::create_pool(url, config.db_max_connections).await?;
            db::run_migrations(&pool).await?;
            Ok((Arc::new(PgUserStore::new(pool)), StoreBackend::Postgres))
        }
        None => {
            tracing::warn!(
                "DATABASE_URL not set, using the in-memory store; data will not survive a restart"
            );
            Ok((Arc::new(MemoryUserStore::new()), StoreBackend::Memory))
        }
    }
}

fn configure_cors(config: &Config) -> CorsLayer {
    let Some(raw) = config.cors_allowed_origins.as_deref() else {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins");
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = raw.split(',').filter_map(|s| s.trim().parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

/// Graceful shutdown signal handler.
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
            tracing::info!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}
