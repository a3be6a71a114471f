//! Environment variable handling for configuration overrides.
//!
//! This module applies `MESA_*` environment variables on top of values
//! loaded from configuration files.

use crate::config::schema::{parse_time, Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Forces offline (local) mode.
pub const OFFLINE_ENV: &str = "MESA_OFFLINE";
/// Token for token sign-in.
pub const AUTH_TOKEN_ENV: &str = "MESA_AUTH_TOKEN";
/// Enables or disables demo data seeding.
pub const SEED_DEMO_DATA_ENV: &str = "MESA_SEED_DEMO_DATA";
/// Default reservation time (`HH:MM`).
pub const DEFAULT_TIME_ENV: &str = "MESA_DEFAULT_TIME";
/// Explicit database file.
pub const DATABASE_PATH_ENV: &str = "MESA_DATABASE_PATH";
/// Output format for list commands.
pub const OUTPUT_FORMAT_ENV: &str = "MESA_OUTPUT_FORMAT";
/// Database lock wait in seconds.
pub const LOCK_WAIT_ENV: &str = "MESA_MAXIMUM_LOCK_WAIT_SECONDS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use mesa::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value (a non-numeric
    /// timeout, an unknown boolean, a malformed time).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(OFFLINE_ENV) {
            config.offline = Some(Self::parse_bool(OFFLINE_ENV, &val)?);
        }

        if let Ok(token) = env::var(AUTH_TOKEN_ENV) {
            config.auth_token = Some(token);
        }

        if let Ok(val) = env::var(SEED_DEMO_DATA_ENV) {
            config.seed_demo_data = Some(Self::parse_bool(SEED_DEMO_DATA_ENV, &val)?);
        }

        if let Ok(time) = env::var(DEFAULT_TIME_ENV) {
            parse_time(DEFAULT_TIME_ENV, &time)?;
            config.default_time = Some(time.trim().to_string());
        }

        if let Ok(path) = env::var(DATABASE_PATH_ENV) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(format.parse::<OutputFormat>().map_err(|_| {
                Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message: format!("Invalid output format: '{format}'"),
                }
            })?);
        }

        if let Ok(seconds) = env::var(LOCK_WAIT_ENV) {
            config.maximum_lock_wait_seconds =
                Some(seconds.parse().map_err(|_| Error::Validation {
                    field: LOCK_WAIT_ENV.into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
