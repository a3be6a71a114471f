//! Database schema management and migrations.
//!
//! This module handles database schema initialization and version checking.

use rusqlite::{params, Connection};

use crate::error::{Error, Result};

use super::schema::{
    CREATE_METADATA_TABLE, CREATE_RESERVATIONS_TABLE, CREATE_SCHEDULE_INDEX, CREATE_STATUS_INDEX,
    CURRENT_SCHEMA_VERSION, SCHEMA_VERSION_KEY, SELECT_METADATA, UPSERT_METADATA,
};

/// Initializes the database schema.
///
/// This function creates all tables, indices, and metadata for a fresh
/// database. It should only be called on a database that has not been
/// initialized yet.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use mesa::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;

    conn.execute(CREATE_STATUS_INDEX, [])?;
    conn.execute(CREATE_SCHEDULE_INDEX, [])?;

    conn.execute(
        UPSERT_METADATA,
        params![SCHEMA_VERSION_KEY, CURRENT_SCHEMA_VERSION.to_string()],
    )?;

    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than a missing
/// metadata table or row (both of which mean version 0).
pub fn get_schema_version(conn: &Connection) -> Result<u32> {
    match conn.query_row(SELECT_METADATA, [SCHEMA_VERSION_KEY], |row| {
        let value: String = row.get(0)?;
        value.parse::<u32>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(rusqlite::Error::SqliteFailure(_, Some(ref message)))
            if message.contains("no such table") =>
        {
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// A fresh database (version 0) is initialized. Any other version that does
/// not match [`CURRENT_SCHEMA_VERSION`] is rejected.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] on a mismatch, or a database
/// error if initialization or the version query fails.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use mesa::database::migrations::check_schema_compatibility;
///
/// let conn = Connection::open_in_memory().unwrap();
/// check_schema_compatibility(&conn).unwrap();
/// ```
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}
