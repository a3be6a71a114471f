//! Database layer for persistent storage of reservations.
//!
//! This module provides the SQLite-backed handle used by the connected
//! provider: connection management, schema versioning, reservation CRUD, and
//! the metadata that survives between runs (id counter, user id, seeded flag).
//!
//! # Examples
//!
//! ```no_run
//! use mesa::database::{Database, DatabaseConfig};
//! use mesa::seed_reservations;
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/mesa.db")).unwrap();
//! for reservation in seed_reservations() {
//!     db.upsert_reservation(&reservation).unwrap();
//! }
//!
//! for reservation in Database::list_all_reservations(db.connection()).unwrap() {
//!     println!("{reservation}");
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
#[cfg(test)]
pub(crate) mod test_util;
mod transaction;

pub use config::{
    default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME, DATA_DIR_ENV,
};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use schema::CURRENT_SCHEMA_VERSION;
