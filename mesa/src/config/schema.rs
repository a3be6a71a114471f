//! Configuration schema definitions.
//!
//! This module defines the configuration structure for mesa: provider
//! selection, identity, demo data, form defaults, and output settings.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default lock wait in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Default reservation time, as written in configuration files.
pub const DEFAULT_TIME: &str = "19:00";

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; the builder
/// fills in defaults before validation.
///
/// # Examples
///
/// ```
/// use mesa::config::Config;
///
/// let config = Config {
///     offline: Some(true),
///     ..Default::default()
/// };
/// assert!(config.is_offline());
/// assert!(config.seeds_demo_data());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Never connect to the persistent backend; keep everything in memory.
    pub offline: Option<bool>,

    /// Token for token sign-in. Anonymous sign-in is used when absent.
    pub auth_token: Option<String>,

    /// Seed the three demo reservations into an empty, never-seeded store.
    pub seed_demo_data: Option<bool>,

    /// Time assigned to new reservations that leave it unset ("HH:MM").
    pub default_time: Option<String>,

    /// Explicit database file, overriding the data-directory default.
    pub database_path: Option<PathBuf>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns `true` if the backend must not be used.
    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.offline.unwrap_or(false)
    }

    /// Returns `true` if demo reservations should be seeded (default on).
    #[must_use]
    pub fn seeds_demo_data(&self) -> bool {
        self.seed_demo_data.unwrap_or(true)
    }

    /// Returns the trimmed auth token, or `None` when unset.
    ///
    /// A token that is present but blank is returned as `Some("")` so that
    /// sign-in can reject it.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref().map(str::trim)
    }

    /// Returns the busy timeout for the database connection.
    #[must_use]
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Returns the parsed default reservation time.
    ///
    /// # Errors
    ///
    /// Returns an error if `default_time` is set but is not `HH:MM`.
    pub fn default_time(&self) -> Result<NaiveTime> {
        parse_time(
            "default_time",
            self.default_time.as_deref().unwrap_or(DEFAULT_TIME),
        )
    }
}

/// Parses an `HH:MM` time of day.
///
/// # Errors
///
/// Returns [`Error::Validation`] naming `field` if `value` is not `HH:MM`.
///
/// # Examples
///
/// ```
/// use chrono::Timelike;
/// use mesa::config::schema::parse_time;
///
/// assert_eq!(parse_time("time", "20:30").unwrap().hour(), 20);
/// assert!(parse_time("time", "8pm").is_err());
/// ```
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| Error::Validation {
        field: field.into(),
        message: format!("expected HH:MM, got '{value}': {e}"),
    })
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use mesa::config::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "table" => Ok(Self::Table),
            _ => Err(Error::InvalidValue {
                field: "output_format".into(),
                value: s.to_string(),
                reason: "expected json, csv, tsv or table".into(),
            }),
        }
    }
}
