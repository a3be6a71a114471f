//! Database connection management.
//!
//! This module provides the main database connection type with proper
//! initialization and PRAGMA settings for `SQLite`.

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

use super::config::DatabaseConfig;

/// A database connection wrapper with configuration.
///
/// # Examples
///
/// ```no_run
/// use mesa::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/mesa.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// Creates the file and its parent directory when missing, switches the
    /// journal to WAL, applies the busy timeout, and initializes or verifies the
    /// schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its directory cannot be created, a
    /// PRAGMA fails, or the schema version is not supported.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(&config.path, flags)?;

        // PRAGMA journal_mode returns a row
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.execute_batch(&format!(
            "PRAGMA busy_timeout = {}",
            config.busy_timeout.as_millis()
        ))?;

        super::migrations::check_schema_compatibility(&conn)?;

        log::debug!("Opened reservation database at {}", config.path.display());
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}
