//! SQLite snippet storage.
//!
//! One table, keyed by snippet name:
//! - snippets: keyword, message, hidden
//!
//! The database is opened once per invocation and the `Store` handle is
//! threaded through to every operation. Each operation runs in its own
//! transaction and commits before returning.

mod snippets;

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::paths;

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS snippets (
            keyword TEXT PRIMARY KEY NOT NULL,
            message TEXT NOT NULL,
            hidden BOOLEAN NOT NULL DEFAULT 0
        )",
        [],
    )?;

    Ok(())
}

fn configure(conn: &Connection, busy_timeout: Duration) -> rusqlite::Result<()> {
    // concurrent invocations wait for the write lock instead of failing with SQLITE_BUSY
    conn.busy_timeout(busy_timeout)?;
    // LIKE is case sensitive on the relational backends this table was designed for
    conn.execute_batch("PRAGMA case_sensitive_like = ON;")?;
    init_schema(conn)
}

/// Database handle. Open once per command, reuse across all operations.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path, busy_timeout: Duration) -> Result<Self> {
        paths::ensure_parent(path)?;

        let connection_error = |source| Error::Connection {
            path: path.to_path_buf(),
            source,
        };

        let conn = Connection::open(path).map_err(connection_error)?;
        configure(&conn, busy_timeout).map_err(connection_error)?;

        tracing::debug!(path = %path.display(), "database connection established");
        Ok(Store { conn })
    }
}
