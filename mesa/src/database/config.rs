//! Database configuration and path resolution.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MESA_DATA_DIR";

/// File name of the database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "mesa.db";

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use mesa::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/mesa.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert_eq!(config.busy_timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// The busy timeout defaults to 5000ms.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
        }
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub const fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

/// Returns the default data directory, `~/.mesa`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".mesa"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "cannot determine home directory".into(),
        })
}

/// Resolves the database path.
///
/// The resolution order is:
/// 1. `$MESA_DATA_DIR/mesa.db` if `MESA_DATA_DIR` is set
/// 2. `~/.mesa/mesa.db` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `MESA_DATA_DIR` is not set.
pub fn resolve_database_path() -> Result<PathBuf> {
    if let Ok(data_dir) = std::env::var(DATA_DIR_ENV) {
        Ok(PathBuf::from(data_dir).join(DATABASE_FILE_NAME))
    } else {
        Ok(default_data_dir()?.join(DATABASE_FILE_NAME))
    }
}
