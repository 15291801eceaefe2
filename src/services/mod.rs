//! Application service layer.
//!
//! Services contain business logic and sit between the HTTP handlers and the
//! data access layer.

mod contact_service;
mod seed;

pub use contact_service::{ContactService, ContactServiceImpl};
pub use seed::{sample_contacts, seed_contacts};
