//! SQLite storage bootstrap and schema migration entry points.
//!
//! Application data must not be read or written before migrations succeed;
//! the open functions guarantee that for every connection they return.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// Connection target understood by [`open_db`] as an in-memory database.
pub const IN_MEMORY: &str = ":memory:";
