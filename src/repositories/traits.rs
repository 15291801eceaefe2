use crate::domain::ContactId;
use crate::error::{StorageResult, TransactionResult};
use crate::models::Contact;
use async_trait::async_trait;

/// Synchronous storage operations over contacts.
///
/// Implemented directly on a SQLite connection so the same code serves both
/// plain statements and statements inside a transaction.
pub trait ContactGateway {
    /// Look up a contact; `Ok(None)` when no row matches.
    fn find_by_id(&self, id: ContactId) -> StorageResult<Option<Contact>>;

    /// Every stored contact, ordered by id.
    fn find_all(&self) -> StorageResult<Vec<Contact>>;

    /// Insert when `uuid` is `None`, otherwise replace every field of that row.
    fn save(&self, contact: &Contact) -> StorageResult<Contact>;

    /// Remove the row if present. Absence is not an error.
    fn delete_by_id(&self, id: ContactId) -> StorageResult<()>;
}

/// A block of gateway calls executed inside one transaction.
///
/// Returning `Ok` commits; returning `Err` rolls everything back.
pub type UnitOfWork = Box<dyn FnOnce(&dyn ContactGateway) -> TransactionResult<Contact> + Send>;

/// Repository for managing contacts.
///
/// Reads go straight to the store; every write goes through
/// [`ContactRepository::transaction`].
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve a single contact by ID, `None` if it does not exist.
    async fn find_by_id(&self, id: ContactId) -> StorageResult<Option<Contact>>;

    /// Retrieve every contact.
    async fn find_all(&self) -> StorageResult<Vec<Contact>>;

    /// Run `work` atomically against a transaction-scoped gateway.
    async fn transaction(&self, work: UnitOfWork) -> TransactionResult<Contact>;
}
