//! Startup seeding of example contacts.

use crate::error::ServiceResult;
use crate::models::Contact;
use crate::services::ContactService;
use tracing::info;

/// The two example contacts created on first start.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("John", "Doe", "123456", "john@canchito-dev.com"),
        Contact::new("Juan", "Perez", "098765", "juan@canchito-dev.com"),
    ]
}

/// Create the sample contacts through the service when the store is empty.
///
/// Returns the number of contacts created; a store that already holds data
/// is left untouched so restarts against a file database do not duplicate.
pub async fn seed_contacts(service: &dyn ContactService) -> ServiceResult<usize> {
    if !service.list().await?.is_empty() {
        info!("Store already populated, skipping seed");
        return Ok(0);
    }

    let mut created = 0;
    for contact in sample_contacts() {
        let saved = service.create(contact).await?;
        info!(uuid = ?saved.uuid, name = %saved.full_name(), "Seeded contact");
        created += 1;
    }
    Ok(created)
}
