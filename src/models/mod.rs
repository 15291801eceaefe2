//! Data models for the contact service.

pub mod contact;

pub use contact::{Contact, MAX_FIELD_LENGTH};
