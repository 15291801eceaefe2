//! Error types for the contact service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactId, ValidationError};
use thiserror::Error;

/// Errors raised by the persistence gateway.
#[derive(Error, Debug)]
pub enum StorageError {
    /// SQLite reported a failure (connectivity, constraint violation, ...)
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Database schema is newer than this binary understands
    #[error("Unsupported schema version {db_version} (latest supported: {latest_supported})")]
    UnsupportedSchemaVersion { db_version: u32, latest_supported: u32 },

    /// A row could not be mapped back to a contact
    #[error("Invalid persisted contact data: {0}")]
    InvalidData(String),

    /// The blocking worker running the statement failed
    #[error("Storage task failed: {0}")]
    Task(String),

    /// The connection lock was poisoned by a panicking holder
    #[error("Connection lock poisoned")]
    LockPoisoned,
}

/// Reasons a unit of work is abandoned and its transaction rolled back.
#[derive(Error, Debug)]
pub enum TransactionError {
    /// A record the unit of work depends on is absent
    #[error("Contact {0} does not exist")]
    Missing(ContactId),

    /// The record about to be written fails its field constraints
    #[error("Rejected contact: {0}")]
    Rejected(#[from] ValidationError),

    /// Failure reported by the store
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors surfaced by the contact service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// No contact is stored under the requested id
    #[error("Could not find contact with id '{0}'")]
    NotFound(ContactId),

    /// The contact fails its field constraints
    #[error("Invalid contact: {0}")]
    Validation(#[from] ValidationError),

    /// Failure reported by the store
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<TransactionError> for ServiceError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::Missing(id) => ServiceError::NotFound(id),
            TransactionError::Rejected(e) => ServiceError::Validation(e),
            TransactionError::Storage(e) => ServiceError::Storage(e),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for the outcome of a unit of work
pub type TransactionResult<T> = Result<T, TransactionError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServiceError::NotFound(ContactId::from(999));
        assert_eq!(err.to_string(), "Could not find contact with id '999'");

        let err = ServiceError::from(ValidationError::MissingField("mail"));
        assert_eq!(err.to_string(), "Invalid contact: Missing required field: mail");

        let err = ConfigError::InvalidValue {
            var: "BIND_ADDRESS".to_string(),
            reason: "not a socket address".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIND_ADDRESS: not a socket address"
        );
    }

    #[test]
    fn test_storage_error_is_transparent_in_service_error() {
        let err = ServiceError::from(StorageError::LockPoisoned);
        assert_eq!(err.to_string(), "Connection lock poisoned");
        assert!(matches!(err, ServiceError::Storage(StorageError::LockPoisoned)));
    }

    #[test]
    fn test_transaction_error_maps_onto_service_error() {
        let id = ContactId::from(7);

        let err = ServiceError::from(TransactionError::Missing(id));
        assert!(matches!(err, ServiceError::NotFound(i) if i == id));
        assert_eq!(err.to_string(), "Could not find contact with id '7'");

        let err = ServiceError::from(TransactionError::from(ValidationError::MissingField("mail")));
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::MissingField("mail"))
        ));

        let err = ServiceError::from(TransactionError::from(StorageError::LockPoisoned));
        assert!(matches!(err, ServiceError::Storage(StorageError::LockPoisoned)));
    }
}
