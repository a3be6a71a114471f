//! Configuration validation.

use crate::config::schema::{parse_time, Config};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use mesa::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config, false).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration to validate
    /// * `is_shared_file` - Whether this comes from the committed `mesa.yaml`,
    ///   which must not carry an auth token
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(config: &Config, is_shared_file: bool) -> Result<()> {
        if let Some(ref token) = config.auth_token {
            if is_shared_file {
                return Err(Error::Validation {
                    field: "auth_token".into(),
                    message: "auth_token belongs in mesa.local.yaml or the user config, not mesa.yaml"
                        .into(),
                });
            }
            Self::validate_token(token)?;
        }

        if let Some(ref time) = config.default_time {
            parse_time("default_time", time)?;
        }

        if let Some(ref path) = config.database_path {
            if path.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "database_path".into(),
                    message: "Cannot be empty".into(),
                });
            }
            if path.is_dir() {
                return Err(Error::Validation {
                    field: "database_path".into(),
                    message: format!("{} is a directory", path.display()),
                });
            }
        }

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    /// Tokens must be non-blank and free of control characters.
    fn validate_token(token: &str) -> Result<()> {
        let trimmed = token.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: "auth_token".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(Error::Validation {
                field: "auth_token".into(),
                message: "Cannot contain control characters".into(),
            });
        }

        Ok(())
    }
}
