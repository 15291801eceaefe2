//! Contact service layer.
//!
//! Business rules over the repository: not-found translation, merge-by-null
//! updates and the transactional unit of work for every write.

use crate::domain::ContactId;
use crate::error::{ServiceError, ServiceResult, TransactionError, TransactionResult};
use crate::models::Contact;
use crate::repositories::{ContactGateway, ContactRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Fetch one contact, failing with `NotFound` if it does not exist.
    async fn get_by_id(&self, id: ContactId) -> ServiceResult<Contact>;

    /// Every stored contact.
    async fn list(&self) -> ServiceResult<Vec<Contact>>;

    /// Persist a new contact. Any identifier on the input is ignored.
    async fn create(&self, contact: Contact) -> ServiceResult<Contact>;

    /// Apply a partial update.
    ///
    /// Fields absent from `partial` keep their stored values.
    async fn update(&self, id: ContactId, partial: Contact) -> ServiceResult<Contact>;

    /// Remove a contact, failing with `NotFound` if it does not exist.
    async fn delete(&self, id: ContactId) -> ServiceResult<()>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }
}

fn require(gateway: &dyn ContactGateway, id: ContactId) -> TransactionResult<Contact> {
    gateway.find_by_id(id)?.ok_or(TransactionError::Missing(id))
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn get_by_id(&self, id: ContactId) -> ServiceResult<Contact> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    async fn list(&self) -> ServiceResult<Vec<Contact>> {
        Ok(self.repository.find_all().await?)
    }

    async fn create(&self, mut contact: Contact) -> ServiceResult<Contact> {
        contact.uuid = None;
        contact.validate()?;

        let created = self
            .repository
            .transaction(Box::new(move |gateway: &dyn ContactGateway| -> TransactionResult<Contact> {
                Ok(gateway.save(&contact)?)
            }))
            .await?;

        info!(uuid = ?created.uuid, "Contact created");
        Ok(created)
    }

    async fn update(&self, id: ContactId, mut partial: Contact) -> ServiceResult<Contact> {
        partial.uuid = Some(id);

        let updated = self
            .repository
            .transaction(Box::new(move |gateway: &dyn ContactGateway| -> TransactionResult<Contact> {
                let stored = require(gateway, id)?;
                partial.fill_missing_from(&stored);
                partial.validate()?;
                Ok(gateway.save(&partial)?)
            }))
            .await?;

        info!(uuid = %id, "Contact updated");
        Ok(updated)
    }

    async fn delete(&self, id: ContactId) -> ServiceResult<()> {
        let removed = self
            .repository
            .transaction(Box::new(move |gateway: &dyn ContactGateway| -> TransactionResult<Contact> {
                let stored = require(gateway, id)?;
                gateway.delete_by_id(id)?;
                Ok(stored)
            }))
            .await?;

        debug!(name = %removed.full_name(), "Removed contact");
        info!(uuid = %id, "Contact deleted");
        Ok(())
    }
}
