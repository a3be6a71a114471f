//! Shared test utilities for database unit tests.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{PartySize, Reservation, ReservationId, Status};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the lifetime of the test process
    std::mem::forget(dir);

    db
}

/// Creates a pending reservation for two on 2025-12-10 at 19:00.
///
/// # Panics
///
/// Panics if the name is blank.
#[must_use]
pub fn create_test_reservation(id: u64, name: &str) -> Reservation {
    Reservation::builder(
        ReservationId::new(id),
        name,
        "guest@example.com",
        NaiveDate::from_ymd_opt(2025, 12, 10).unwrap(),
    )
    .party_size(PartySize::try_from(2).unwrap())
    .status(Status::Pending)
    .build()
    .unwrap()
}
