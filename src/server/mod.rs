//! HTTP server for the contact API.
//!
//! Exposes the contact service over `GET`/`POST /contact`, plus health and
//! metrics endpoints.

pub mod handlers;

pub use handlers::AppState;

use crate::config::Config;
use anyhow::Result;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/contact",
            get(handlers::get_contact).post(handlers::post_contact),
        )
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
}

/// Run the contact API server.
///
/// Binds `config.bind_addr` and serves until Ctrl-C is received, letting
/// in-flight requests finish.
pub async fn run_server(config: &Config, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Contact API listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
