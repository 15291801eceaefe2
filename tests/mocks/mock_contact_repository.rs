use async_trait::async_trait;
use contact_rest_api::error::{StorageError, StorageResult, TransactionResult};
use contact_rest_api::repositories::{ContactGateway, ContactRepository, UnitOfWork};
use contact_rest_api::{Contact, ContactId};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
struct MockState {
    contacts: BTreeMap<ContactId, Contact>,
    last_id: i64,
    fail_saves: bool,
}

impl MockState {
    fn find_by_id(&self, id: ContactId) -> Option<Contact> {
        self.contacts.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<Contact> {
        self.contacts.values().cloned().collect()
    }

    fn save(&mut self, contact: &Contact) -> StorageResult<Contact> {
        if self.fail_saves {
            return Err(StorageError::InvalidData("injected save failure".to_string()));
        }

        let id = match contact.uuid {
            Some(id) => {
                self.last_id = self.last_id.max(id.value());
                id
            }
            None => {
                self.last_id += 1;
                ContactId::from(self.last_id)
            }
        };
        let saved = contact.clone().with_id(id);
        self.contacts.insert(id, saved.clone());
        Ok(saved)
    }

    fn delete_by_id(&mut self, id: ContactId) {
        self.contacts.remove(&id);
    }
}

/// Transaction-scoped view over a private copy of the mock state.
struct StagedGateway {
    state: RefCell<MockState>,
}

impl ContactGateway for StagedGateway {
    fn find_by_id(&self, id: ContactId) -> StorageResult<Option<Contact>> {
        Ok(self.state.borrow().find_by_id(id))
    }

    fn find_all(&self) -> StorageResult<Vec<Contact>> {
        Ok(self.state.borrow().find_all())
    }

    fn save(&self, contact: &Contact) -> StorageResult<Contact> {
        self.state.borrow_mut().save(contact)
    }

    fn delete_by_id(&self, id: ContactId) -> StorageResult<()> {
        self.state.borrow_mut().delete_by_id(id);
        Ok(())
    }
}

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data and tracks method calls for verification.
/// A unit of work runs against a copy of the state that is written back only
/// on success, so rollbacks are observable.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    state: Arc<Mutex<MockState>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact to the mock repository, assigning an id if it has none.
    pub fn add_contact(&self, contact: Contact) -> Contact {
        let mut state = self.state.lock().unwrap();
        let fail_saves = std::mem::replace(&mut state.fail_saves, false);
        let saved = state.save(&contact).unwrap();
        state.fail_saves = fail_saves;
        saved
    }

    /// Make every subsequent save fail with a storage error.
    pub fn fail_saves(&self, fail: bool) {
        self.state.lock().unwrap().fail_saves = fail;
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().contacts.len()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn find_by_id(&self, id: ContactId) -> StorageResult<Option<Contact>> {
        self.track_call("find_by_id");
        Ok(self.state.lock().unwrap().find_by_id(id))
    }

    async fn find_all(&self) -> StorageResult<Vec<Contact>> {
        self.track_call("find_all");
        Ok(self.state.lock().unwrap().find_all())
    }

    async fn transaction(&self, work: UnitOfWork) -> TransactionResult<Contact> {
        self.track_call("transaction");

        let mut state = self.state.lock().unwrap();
        let staged = StagedGateway {
            state: RefCell::new(state.clone()),
        };

        match work(&staged) {
            Ok(contact) => {
                *state = staged.state.into_inner();
                self.track_call("commit");
                Ok(contact)
            }
            Err(err) => {
                self.track_call("rollback");
                Err(err)
            }
        }
    }
}
