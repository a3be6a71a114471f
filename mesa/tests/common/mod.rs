//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the mesa library.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use tempfile::TempDir;

use mesa::{Config, ReservationDraft, ReservationId, Status};

/// Creates a temporary directory for testing.
#[allow(dead_code)]
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Returns the database path inside `dir`.
#[allow(dead_code)]
pub fn database_path(dir: &Path) -> PathBuf {
    dir.join("mesa.db")
}

/// A connected configuration backed by a database in `dir`.
#[allow(dead_code)]
pub fn connected_config(dir: &Path) -> Config {
    Config {
        database_path: Some(database_path(dir)),
        ..Config::default()
    }
}

/// An offline configuration.
#[allow(dead_code)]
pub fn offline_config() -> Config {
    Config {
        offline: Some(true),
        ..Config::default()
    }
}

/// Builder for reservation drafts with valid defaults.
///
/// Defaults:
/// - name: "Ana Torres"
/// - email: "ana@example.com"
/// - date: 2025-12-10
/// - time: 19:00
/// - party size: 2
#[allow(dead_code)]
pub struct DraftFixture {
    draft: ReservationDraft,
}

#[allow(dead_code)]
impl DraftFixture {
    /// Creates a new fixture with valid defaults.
    pub fn new() -> Self {
        Self {
            draft: ReservationDraft {
                customer_name: "Ana Torres".to_string(),
                customer_email: "ana@example.com".to_string(),
                reservation_date: NaiveDate::from_ymd_opt(2025, 12, 10),
                ..ReservationDraft::default()
            },
        }
    }

    /// Targets an existing record.
    pub fn with_id(mut self, id: u64) -> Self {
        self.draft.id = Some(ReservationId::new(id));
        self
    }

    /// Sets the customer name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.draft.customer_name = name.to_string();
        self
    }

    /// Sets the customer email.
    pub fn with_email(mut self, email: &str) -> Self {
        self.draft.customer_email = email.to_string();
        self
    }

    /// Sets or clears the date.
    pub fn with_date(mut self, date: Option<NaiveDate>) -> Self {
        self.draft.reservation_date = date;
        self
    }

    /// Sets the time.
    pub fn with_time(mut self, hour: u32, minute: u32) -> Self {
        self.draft.reservation_time = NaiveTime::from_hms_opt(hour, minute, 0);
        self
    }

    /// Sets the raw party size.
    pub fn with_party_size(mut self, size: i64) -> Self {
        self.draft.party_size = size;
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.draft.status = status;
        self
    }

    /// Builds the draft.
    pub fn build(self) -> ReservationDraft {
        self.draft
    }
}

impl Default for DraftFixture {
    fn default() -> Self {
        Self::new()
    }
}
