//! Domain value objects and types.
//!
//! The contact identifier, the email format check and the validation error
//! raised when a contact fails its field constraints.

pub mod contact_id;
pub mod email;
pub mod errors;

pub use contact_id::ContactId;
pub use errors::ValidationError;
