//! Contact REST API - a CRUD HTTP service for contacts backed by SQLite.
//!
//! # Architecture
//!
//! - **domain**: Value objects (contact id, email address) and validation errors
//! - **models**: The `Contact` record and its field constraints
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **db**: SQLite connection bootstrap and schema migrations
//! - **repositories**: Persistence gateway over the `contact` table
//! - **services**: Business rules (not-found, merge-by-null updates, transactions)
//! - **server**: axum routes, handlers and request tracing

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use domain::{ContactId, ValidationError};
pub use error::{ConfigError, ServiceError, StorageError, TransactionError};
pub use models::Contact;
pub use repositories::{ContactGateway, ContactRepository, SqliteContactRepository};
pub use server::{router, run_server};
pub use services::{ContactService, ContactServiceImpl};
