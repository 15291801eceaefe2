//! ContactId value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a persisted contact.
///
/// Serialized as a bare JSON integer.
///
/// # Example
///
/// ```
/// use contact_rest_api::domain::ContactId;
///
/// let id = ContactId::from(5);
/// assert_eq!(id.value(), 5);
/// assert_eq!(serde_json::to_string(&id).unwrap(), "5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(i64);

impl ContactId {
    /// Get the raw integer value.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for ContactId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ContactId> for i64 {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
