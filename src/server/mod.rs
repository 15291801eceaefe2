//! HTTP server for the contact service.
//!
//! Exposes the `/contact` resource through an explicit axum route table.

pub mod handlers;
mod middleware;

pub use handlers::{ApiError, AppState};

use crate::services::ContactService;
use anyhow::Result;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// Build the application router over the given service.
pub fn router(contact_service: Arc<dyn ContactService>) -> Router {
    let state = AppState { contact_service };

    Router::new()
        .route(
            "/contact",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/contact/{id}",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .with_state(state)
}

/// Serve the router on `addr` until Ctrl-C is received.
///
/// # Arguments
/// * `addr` - Address to bind
/// * `contact_service` - Service backing every handler
pub async fn run_server(addr: SocketAddr, contact_service: Arc<dyn ContactService>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, router(contact_service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
