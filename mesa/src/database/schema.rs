//! Database schema definitions and SQL constants.
//!
//! This module contains the table definitions, indices, and metadata keys
//! for the mesa reservation database.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Metadata key holding the schema version.
pub const SCHEMA_VERSION_KEY: &str = "schema_version";

/// Metadata key holding the next reservation id to assign.
pub const NEXT_ID_KEY: &str = "next_id";

/// Metadata key holding the signed-in user id.
pub const USER_ID_KEY: &str = "user_id";

/// Metadata key recording that the demo reservations were written once.
pub const SEEDED_KEY: &str = "seeded";

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for versioning, the id counter
/// and the resolved identity.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Ids are assigned by the in-memory store and only ever grow, so ordering
/// by id reproduces insertion order.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY NOT NULL,
        customer_name TEXT NOT NULL,
        customer_email TEXT NOT NULL,
        reservation_date TEXT NOT NULL,
        reservation_time TEXT NOT NULL,
        party_size INTEGER NOT NULL CHECK (party_size BETWEEN 1 AND 10),
        status TEXT NOT NULL
    )";

/// SQL statement to create an index on the status column.
pub const CREATE_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_status ON reservations(status)";

/// SQL statement to create an index on the reserved date and time.
pub const CREATE_SCHEDULE_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_reservations_schedule \
     ON reservations(reservation_date, reservation_time)";

/// SQL statement to select a metadata value by key.
pub const SELECT_METADATA: &str = "SELECT value FROM metadata WHERE key = ?";

/// SQL statement to insert or update a metadata value.
pub const UPSERT_METADATA: &str = "INSERT OR REPLACE INTO metadata (key, value) VALUES (?, ?)";

/// SQL statement to insert or replace a reservation.
///
/// Shared by single writes and the seeding transaction.
pub const UPSERT_RESERVATION: &str = r"
    INSERT OR REPLACE INTO reservations
    (id, customer_name, customer_email, reservation_date, reservation_time, party_size, status)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to delete a reservation by id.
pub const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?";

/// Storage format for reservation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage format for reservation times.
pub const TIME_FORMAT: &str = "%H:%M:%S";
