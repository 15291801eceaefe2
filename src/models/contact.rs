//! Contact model, the single entity managed by the service.

use crate::domain::email::is_valid_email;
use crate::domain::{ContactId, ValidationError};
use serde::{Deserialize, Serialize};

/// Maximum length, in characters, of every text field of a contact.
pub const MAX_FIELD_LENGTH: usize = 60;

/// A contact record.
///
/// Every text field is optional in memory so that a request body can carry a
/// partial contact; [`Contact::validate`] enforces presence before anything
/// reaches the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    /// Store-assigned identifier, `None` until persisted
    pub uuid: Option<ContactId>,

    /// First name
    pub first_name: Option<String>,

    /// Last name
    pub last_name: Option<String>,

    /// Telephone number, free-form
    pub telephone: Option<String>,

    /// Email address
    pub mail: Option<String>,
}

impl Contact {
    /// Create an unsaved contact with all fields set.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        telephone: impl Into<String>,
        mail: impl Into<String>,
    ) -> Self {
        Self {
            uuid: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            telephone: Some(telephone.into()),
            mail: Some(mail.into()),
        }
    }

    /// Return the same contact addressed by `id`.
    pub fn with_id(mut self, id: ContactId) -> Self {
        self.uuid = Some(id);
        self
    }

    /// Check the field constraints a persisted contact must satisfy.
    ///
    /// All four text fields must be present and at most
    /// [`MAX_FIELD_LENGTH`] characters, and `mail` must be a well-formed
    /// address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let first_name = required("firstName", self.first_name.as_deref())?;
        let last_name = required("lastName", self.last_name.as_deref())?;
        let telephone = required("telephone", self.telephone.as_deref())?;
        let mail = required("mail", self.mail.as_deref())?;

        bounded("firstName", first_name)?;
        bounded("lastName", last_name)?;
        bounded("telephone", telephone)?;
        bounded("mail", mail)?;

        if !is_valid_email(mail) {
            return Err(ValidationError::InvalidEmail(mail.to_string()));
        }

        Ok(())
    }

    /// Fill every absent field from `stored`, leaving present fields alone.
    ///
    /// The identifier is not touched.
    pub fn fill_missing_from(&mut self, stored: &Contact) {
        if self.last_name.is_none() {
            self.last_name = stored.last_name.clone();
        }
        if self.mail.is_none() {
            self.mail = stored.mail.clone();
        }
        if self.first_name.is_none() {
            self.first_name = stored.first_name.clone();
        }
        if self.telephone.is_none() {
            self.telephone = stored.telephone.clone();
        }
    }

    /// Full display name, e.g. "John Doe".
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => String::new(),
        }
    }
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

fn bounded(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_FIELD_LENGTH {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_FIELD_LENGTH,
        });
    }
    Ok(())
}
