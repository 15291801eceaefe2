//! Connection bootstrap utilities for SQLite.
//!
//! Returned connections have a busy timeout configured and every migration
//! applied.

use super::migrations::apply_migrations;
use crate::error::StorageResult;
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{error, info};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a SQLite database file and applies all pending migrations.
pub fn open_db(path: impl AsRef<Path>) -> StorageResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(mode = "file", path = %path.display(), "Opening database");

    let conn = Connection::open(path).map_err(|err| {
        error!(
            mode = "file",
            duration_ms = started_at.elapsed().as_millis() as u64,
            error = %err,
            "Failed to open database"
        );
        err
    })?;

    finish_open(conn, "file", started_at)
}

/// Opens an in-memory SQLite database and applies all pending migrations.
pub fn open_db_in_memory() -> StorageResult<Connection> {
    let started_at = Instant::now();
    info!(mode = "memory", "Opening database");

    let conn = Connection::open_in_memory().map_err(|err| {
        error!(
            mode = "memory",
            duration_ms = started_at.elapsed().as_millis() as u64,
            error = %err,
            "Failed to open database"
        );
        err
    })?;

    finish_open(conn, "memory", started_at)
}

fn finish_open(
    mut conn: Connection,
    mode: &'static str,
    started_at: Instant,
) -> StorageResult<Connection> {
    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                mode,
                duration_ms = started_at.elapsed().as_millis() as u64,
                "Database ready"
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                mode,
                duration_ms = started_at.elapsed().as_millis() as u64,
                error = %err,
                "Failed to bootstrap database"
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> StorageResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)?;
    Ok(())
}
