//! Validation rules for reservation drafts.
//!
//! Every rule is independent: a draft that breaks several rules reports all
//! of them at once, keyed by the field they belong to.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::reservation::{PartySize, ReservationDraft};

/// Message for a blank customer name.
pub const NAME_REQUIRED: &str = "customer name is required";

/// Message for an email address that does not match the accepted shape.
pub const EMAIL_INVALID: &str = "must be a valid email address";

/// Message for a party size outside 1-10.
pub const PARTY_SIZE_OUT_OF_RANGE: &str = "party size must be between 1 and 10";

/// Message for a missing reservation date.
pub const DATE_REQUIRED: &str = "reservation date is required";

// Local part of letters, digits, `_`, `.` or `-`, then dot-terminated
// labels and a 2-4 letter top-level domain. No surrounding whitespace.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z]{2,4}$")
        .expect("EMAIL_REGEX: invalid regex pattern")
});

/// A validated field of a reservation draft.
///
/// Variants are declared in form order, which is also the order
/// [`ValidationErrors`] iterates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// The customer's name.
    CustomerName,
    /// The customer's email address.
    CustomerEmail,
    /// The reserved date.
    ReservationDate,
    /// The number of guests.
    PartySize,
}

impl Field {
    /// All validated fields.
    pub const ALL: [Self; 4] = [
        Self::CustomerName,
        Self::CustomerEmail,
        Self::ReservationDate,
        Self::PartySize,
    ];

    /// Returns the camelCase name used on the wire.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::CustomerName => "customerName",
            Self::CustomerEmail => "customerEmail",
            Self::ReservationDate => "reservationDate",
            Self::PartySize => "partySize",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Per-field validation messages. Empty means the draft is acceptable.
///
/// # Examples
///
/// ```
/// use mesa::validation::{Field, ValidationErrors};
///
/// let mut errors = ValidationErrors::default();
/// assert!(errors.is_empty());
///
/// errors.insert(Field::PartySize, "party size must be between 1 and 10");
/// assert_eq!(errors.get(Field::PartySize), Some("party size must be between 1 and 10"));
/// assert_eq!(errors.to_string(), "partySize: party size must be between 1 and 10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    /// Records a message for `field`, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Removes the message for `field`, returning it if present.
    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    /// Returns the message for `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Returns `true` if `field` has a message.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns `true` if no rule was violated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of violated rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over field/message pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (Field, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (Field, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Returns `true` if `email` has the accepted shape: a local part of
/// letters, digits, `_`, `.` or `-`, an `@`, one or more dot-terminated
/// labels, and a 2-4 letter top-level domain.
///
/// # Examples
///
/// ```
/// use mesa::validation::is_valid_email;
///
/// assert!(is_valid_email("ana@x.com"));
/// assert!(is_valid_email("first.last@mail.example.org"));
/// assert!(!is_valid_email("ana@x"));
/// assert!(!is_valid_email("ana@x.travel"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Runs the rule for a single field, returning its message if violated.
#[must_use]
pub fn validate_field(draft: &ReservationDraft, field: Field) -> Option<String> {
    let violated = match field {
        Field::CustomerName => draft.customer_name.trim().is_empty(),
        Field::CustomerEmail => !is_valid_email(&draft.customer_email),
        Field::ReservationDate => draft.reservation_date.is_none(),
        Field::PartySize => !PartySize::in_range(draft.party_size),
    };

    violated.then(|| message_for(field).to_string())
}

/// Runs every rule against `draft` and collects the violations.
///
/// Rules do not short-circuit; each violated rule contributes exactly one
/// entry.
///
/// # Examples
///
/// ```
/// use mesa::validation::{validate, Field};
/// use mesa::ReservationDraft;
///
/// let draft = ReservationDraft {
///     customer_name: "  ".into(),
///     customer_email: "bad".into(),
///     party_size: 0,
///     ..ReservationDraft::default()
/// };
/// let errors = validate(&draft);
/// assert_eq!(errors.len(), 4);
/// assert!(errors.contains(Field::ReservationDate));
/// ```
#[must_use]
pub fn validate(draft: &ReservationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in Field::ALL {
        if let Some(message) = validate_field(draft, field) {
            errors.insert(field, message);
        }
    }
    errors
}

const fn message_for(field: Field) -> &'static str {
    match field {
        Field::CustomerName => NAME_REQUIRED,
        Field::CustomerEmail => EMAIL_INVALID,
        Field::ReservationDate => DATE_REQUIRED,
        Field::PartySize => PARTY_SIZE_OUT_OF_RANGE,
    }
}
