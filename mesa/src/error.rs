//! Error types for the mesa library.
//!
//! This module provides the error hierarchy for all operations in the mesa
//! library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::reservation::ReservationId;
use crate::validation::ValidationErrors;

/// Result type alias for operations that may fail with a mesa error.
///
/// # Examples
///
/// ```
/// use mesa::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the mesa library.
///
/// This enum encompasses all possible error conditions that can occur
/// while managing reservations.
#[derive(Debug, Error)]
pub enum Error {
    /// A single field failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A reservation draft was rejected by the validation rules.
    #[error("reservation rejected: {0}")]
    ValidationFailed(ValidationErrors),

    /// No reservation has the requested id.
    #[error("reservation {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: ReservationId,
    },

    /// An intent was issued in a view that does not accept it.
    #[error("cannot {action} while {view}")]
    InvalidTransition {
        /// The intent that was rejected.
        action: &'static str,
        /// The current view, as displayed.
        view: String,
    },

    /// A value could not be parsed into its typed form.
    #[error("invalid {field} '{value}': {reason}")]
    InvalidValue {
        /// The field being parsed.
        field: String,
        /// The raw value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The id counter has no ids left to hand out.
    #[error("reservation ids exhausted at {next_id}")]
    IdsExhausted {
        /// The counter value that cannot be assigned.
        next_id: u64,
    },

    /// Sign-in against the identity provider failed.
    #[error("authentication failed: {reason}")]
    Authentication {
        /// The reason sign-in failed.
        reason: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

impl From<crate::reservation::InvalidPartySizeError> for Error {
    fn from(err: crate::reservation::InvalidPartySizeError) -> Self {
        Self::InvalidValue {
            field: "partySize".into(),
            value: err.value.to_string(),
            reason: err.reason,
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Self::ValidationFailed(errors)
    }
}

impl Error {
    /// Check if error indicates a missing reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesa::{Error, ReservationId};
    ///
    /// let err = Error::NotFound { id: ReservationId::new(7) };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the per-field validation errors if this is a rejected draft.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::ValidationFailed(errors) => Some(errors),
            _ => None,
        }
    }
}
