//! Contact REST API - Main entry point
//!
//! Loads configuration, opens the SQLite store, seeds the example contacts
//! and serves the `/contact` resource over HTTP.

use anyhow::Result;
use contact_rest_api::repositories::{ContactRepository, SqliteContactRepository};
use contact_rest_api::services::{seed_contacts, ContactService, ContactServiceImpl};
use contact_rest_api::Config;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins; otherwise LOG_LEVEL from the configuration
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

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

    info!(database = %config.database_path, "Starting contact service");

    let repository =
        Arc::new(SqliteContactRepository::open(&config.database_path)?) as Arc<dyn ContactRepository>;
    let service = Arc::new(ContactServiceImpl::new(repository)) as Arc<dyn ContactService>;

    if config.seed_contacts {
        let seeded = seed_contacts(service.as_ref()).await?;
        info!(count = seeded, "Seeding finished");
    }

    contact_rest_api::run_server(config.bind_address, service).await?;

    info!("Contact service shutdown complete");
    Ok(())
}
