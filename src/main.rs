//! Contact API - Main entry point
//!
//! Wires the in-memory contact repository into the contact service and serves
//! it over HTTP.

use anyhow::Result;
use contact_api::repositories::{ContactRepository, InMemoryContactRepository};
use contact_api::server::{self, AppState};
use contact_api::services::{ContactService, ContactServiceImpl};
use contact_api::{Config, MetricsTracker};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize repository and service
    let metrics = MetricsTracker::new();
    let contact_repo = Arc::new(InMemoryContactRepository::new()) as Arc<dyn ContactRepository>;
    let contact_service = ContactServiceImpl::builder()
        .repository(contact_repo)
        .metrics(metrics.clone())
        .build()?;
    let contact_service = Arc::new(contact_service) as Arc<dyn ContactService>;

    info!("Contact API initialized");

    server::run_server(&config, AppState::new(contact_service, metrics)).await?;

    info!("Contact API shutdown complete");
    Ok(())
}
