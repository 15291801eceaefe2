use crate::db::{self, IN_MEMORY};
use crate::domain::ContactId;
use crate::error::{StorageError, StorageResult, TransactionError, TransactionResult};
use crate::models::Contact;
use crate::repositories::traits::{ContactGateway, ContactRepository, UnitOfWork};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use std::path::Path;
use std::sync::{Arc, Mutex};

const CONTACT_SELECT_SQL: &str = "SELECT uuid, first_name, last_name, telephone, mail FROM contact";

fn map_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        uuid: Some(ContactId::from(row.get::<_, i64>("uuid")?)),
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        telephone: row.get("telephone")?,
        mail: row.get("mail")?,
    })
}

impl ContactGateway for Connection {
    fn find_by_id(&self, id: ContactId) -> StorageResult<Option<Contact>> {
        let contact = self
            .query_row(
                &format!("{CONTACT_SELECT_SQL} WHERE uuid = ?1"),
                [id.value()],
                map_row,
            )
            .optional()?;
        Ok(contact)
    }

    fn find_all(&self) -> StorageResult<Vec<Contact>> {
        let mut stmt = self.prepare(&format!("{CONTACT_SELECT_SQL} ORDER BY uuid ASC"))?;
        let contacts = stmt
            .query_map([], map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(contacts)
    }

    fn save(&self, contact: &Contact) -> StorageResult<Contact> {
        let uuid = match contact.uuid {
            None => {
                self.execute(
                    "INSERT INTO contact (first_name, last_name, telephone, mail)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![
                        contact.first_name,
                        contact.last_name,
                        contact.telephone,
                        contact.mail
                    ],
                )?;
                ContactId::from(self.last_insert_rowid())
            }
            Some(id) => {
                self.execute(
                    "INSERT INTO contact (uuid, first_name, last_name, telephone, mail)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT(uuid) DO UPDATE SET
                        first_name = excluded.first_name,
                        last_name = excluded.last_name,
                        telephone = excluded.telephone,
                        mail = excluded.mail",
                    params![
                        id.value(),
                        contact.first_name,
                        contact.last_name,
                        contact.telephone,
                        contact.mail
                    ],
                )?;
                id
            }
        };

        ContactGateway::find_by_id(self, uuid)?.ok_or_else(|| {
            StorageError::InvalidData(format!("contact {uuid} missing right after save"))
        })
    }

    fn delete_by_id(&self, id: ContactId) -> StorageResult<()> {
        self.execute("DELETE FROM contact WHERE uuid = ?1", [id.value()])?;
        Ok(())
    }
}

/// Contact repository backed by a single SQLite connection.
///
/// SQLite calls are blocking, so every operation runs on
/// `tokio::task::spawn_blocking` while holding the connection lock. A unit
/// of work holds that lock for its whole `BEGIN IMMEDIATE` transaction.
#[derive(Clone)]
pub struct SqliteContactRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteContactRepository {
    /// Wrap an already migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Open (and migrate) the database at `path`; `:memory:` selects an
    /// in-memory database.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        let conn = if path == Path::new(IN_MEMORY) {
            db::open_db_in_memory()?
        } else {
            db::open_db(path)?
        };
        Ok(Self::new(conn))
    }

    async fn run<T, F>(&self, op: F) -> StorageResult<T>
    where
        F: FnOnce(&Connection) -> StorageResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| StorageError::LockPoisoned)?;
            op(&guard)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn find_by_id(&self, id: ContactId) -> StorageResult<Option<Contact>> {
        self.run(move |conn| ContactGateway::find_by_id(conn, id))
            .await
    }

    async fn find_all(&self) -> StorageResult<Vec<Contact>> {
        self.run(|conn| ContactGateway::find_all(conn)).await
    }

    async fn transaction(&self, work: UnitOfWork) -> TransactionResult<Contact> {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || -> TransactionResult<Contact> {
            let mut guard = conn.lock().map_err(|_| StorageError::LockPoisoned)?;
            let tx = guard
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(StorageError::from)?;

            match work(&*tx) {
                Ok(contact) => {
                    tx.commit().map_err(StorageError::from)?;
                    tracing::debug!(uuid = ?contact.uuid, "Transaction committed");
                    Ok(contact)
                }
                Err(err) => {
                    if let Err(rollback_err) = tx.rollback() {
                        tracing::warn!(error = %rollback_err, "Rollback failed");
                    }
                    tracing::debug!(error = %err, "Transaction rolled back");
                    Err(err)
                }
            }
        })
        .await
        .map_err(|e| TransactionError::Storage(StorageError::Task(e.to_string())))?
    }
}
