//! Greeter Server - HTTP API
//!
//! This crate provides the web backend:
//! - Root greeting, health check and version endpoints
//! - Permissive cross-origin policy on every response
//! - Server configuration and startup

mod config;
mod cors;
mod routes;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use cors::PREFLIGHT_MAX_AGE;
pub use routes::health::HealthResponse;
pub use routes::root::RootResponse;
pub use routes::version::VersionResponse;

/// Create the router with all routes
pub fn create_router() -> Router {
    let router = Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health_check))
        .route("/api/version", get(routes::version::version));

    cors::apply(router).layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
///
/// Runs until Ctrl-C or SIGTERM, then stops accepting connections and lets
/// in-flight requests finish.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr()?;
    let router = create_router();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Greeter server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Greeter server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl-C, shutting down"),
            Err(err) => {
                tracing::error!("Failed to listen for Ctrl-C signal: {}", err);
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM, shutting down");
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
