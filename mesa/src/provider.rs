//! Identity and persistence provider.
//!
//! A [`Provider`] is chosen once at startup. In connected mode it wraps the
//! SQLite database: it resolves the user's identity, loads the saved
//! reservations, and mirrors every store mutation. In local mode everything
//! stays in memory. Sync is fire-and-forget: failures are logged and never
//! block or undo the in-memory change.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};

use crate::config::Config;
use crate::database::{resolve_database_path, Database, DatabaseConfig};
use crate::error::{Error, Result};
use crate::reservation::{seed_reservations, Reservation, ReservationId};
use crate::store::ReservationStore;

/// User id reported when running without a backend.
pub const LOCAL_DEMO_USER: &str = "DEMO_USER_LOCAL";

/// The identity behind the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserId {
    /// Not resolved yet.
    #[default]
    Unknown,
    /// Signed in with the backend.
    Resolved(String),
    /// Local placeholder identity.
    LocalDemo,
}

impl UserId {
    /// Returns the id as displayed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => "unknown",
            Self::Resolved(id) => id,
            Self::LocalDemo => LOCAL_DEMO_USER,
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where reservations live beyond the current process.
#[derive(Debug)]
pub enum Provider {
    /// Backed by a database.
    Connected(Box<Database>),
    /// In memory only.
    Local,
}

impl Provider {
    /// Resolves the provider for `config`.
    ///
    /// Offline configurations get [`Provider::Local`]. Otherwise the database
    /// at `config.database_path` (or the default data directory) is opened;
    /// any failure is logged and also yields [`Provider::Local`].
    #[must_use]
    pub fn connect(config: &Config) -> Self {
        if config.is_offline() {
            debug!("Offline mode requested; using local provider");
            return Self::Local;
        }

        let path = match config.database_path.clone() {
            Some(path) => path,
            None => match resolve_database_path() {
                Ok(path) => path,
                Err(e) => {
                    warn!("Cannot locate reservation database ({e}); working offline");
                    return Self::Local;
                }
            },
        };

        let db_config = DatabaseConfig::new(&path).with_busy_timeout(config.lock_timeout());
        match Database::open(db_config) {
            Ok(db) => {
                info!("Connected to reservation database at {}", path.display());
                Self::Connected(Box::new(db))
            }
            Err(e) => {
                warn!("Cannot open {} ({e}); working offline", path.display());
                Self::Local
            }
        }
    }

    /// Returns `true` when backed by a database.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    /// Resolves the user identity.
    ///
    /// Local mode always yields [`UserId::LocalDemo`]. In connected mode a
    /// configured token is tried first; if it is rejected, anonymous sign-in
    /// follows. If anonymous sign-in fails too, the provider drops to local
    /// mode.
    pub fn sign_in(&mut self, config: &Config) -> UserId {
        if !self.is_connected() {
            return UserId::LocalDemo;
        }

        if let Some(token) = config.auth_token() {
            match Self::sign_in_with_token(token) {
                Ok(id) => {
                    info!("Signed in with token as {id}");
                    return UserId::Resolved(id);
                }
                Err(e) => warn!("{e}; falling back to anonymous sign-in"),
            }
        }

        match self.sign_in_anonymously() {
            Ok(id) => {
                info!("Signed in anonymously as {id}");
                UserId::Resolved(id)
            }
            Err(e) => {
                warn!("Anonymous sign-in failed ({e}); working offline");
                *self = Self::Local;
                UserId::LocalDemo
            }
        }
    }

    fn sign_in_with_token(token: &str) -> Result<String> {
        if token.is_empty() {
            return Err(Error::Authentication {
                reason: "auth token is blank".into(),
            });
        }
        Ok(token.to_string())
    }

    fn sign_in_anonymously(&mut self) -> Result<String> {
        let Self::Connected(db) = self else {
            return Err(Error::Authentication {
                reason: "no backend available".into(),
            });
        };

        if let Some(existing) = Database::user_id(db.connection())? {
            return Ok(existing);
        }

        let id = mint_anonymous_id();
        db.set_user_id(&id)?;
        Ok(id)
    }

    /// Builds the initial store.
    ///
    /// Connected mode loads persisted reservations and the id counter. A
    /// database that is empty, was never seeded, and never handed out an id
    /// receives the demo reservations when `seed_demo_data` is set. Local mode starts from the
    /// demo reservations when `seed_demo_data` is set, or empty otherwise.
    /// A failed load is logged and drops the provider to local mode.
    pub fn load_store(&mut self, seed_demo_data: bool) -> ReservationStore {
        let Self::Connected(db) = self else {
            return local_store(seed_demo_data);
        };

        match load_persisted(db, seed_demo_data) {
            Ok(store) => store,
            Err(e) => {
                warn!("Cannot load saved reservations ({e}); working offline");
                *self = Self::Local;
                local_store(seed_demo_data)
            }
        }
    }

    /// Mirrors a created or updated reservation.
    pub fn sync_upsert(&mut self, reservation: &Reservation) {
        if let Self::Connected(db) = self {
            if let Err(e) = db.upsert_reservation(reservation) {
                warn!("Failed to sync reservation {}: {e}", reservation.id());
            }
        }
    }

    /// Mirrors a deletion.
    pub fn sync_delete(&mut self, id: ReservationId) {
        if let Self::Connected(db) = self {
            match db.delete_reservation(id) {
                Ok(true) => {}
                Ok(false) => debug!("Reservation {id} was not in the database"),
                Err(e) => warn!("Failed to sync deletion of reservation {id}: {e}"),
            }
        }
    }

    /// Mirrors the id counter.
    pub fn sync_counter(&mut self, next_id: ReservationId) {
        if let Self::Connected(db) = self {
            if let Err(e) = db.set_next_id(next_id) {
                warn!("Failed to sync id counter: {e}");
            }
        }
    }
}

fn local_store(seed_demo_data: bool) -> ReservationStore {
    if seed_demo_data {
        ReservationStore::with_records(seed_reservations())
    } else {
        ReservationStore::new()
    }
}

fn load_persisted(db: &mut Database, seed_demo_data: bool) -> Result<ReservationStore> {
    let records = Database::list_all_reservations(db.connection())?;
    let next_id = Database::next_id(db.connection())?;

    // ids handed out before would be reused by the demo rows
    let counter_untouched = next_id.map_or(true, |next| next <= 1);
    if records.is_empty()
        && seed_demo_data
        && counter_untouched
        && !Database::is_seeded(db.connection())?
    {
        let store = ReservationStore::with_records(seed_reservations());
        if let Err(e) = db.seed(store.list(), store.next_id()) {
            warn!("Failed to persist demo reservations: {e}");
        }
        return Ok(store);
    }

    debug!("Loaded {} saved reservations", records.len());
    Ok(match next_id {
        Some(next_id) => ReservationStore::restore(records, next_id),
        None => ReservationStore::with_records(records),
    })
}

fn mint_anonymous_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("anon-{nanos:x}")
}
