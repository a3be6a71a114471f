//! Reservation types for restaurant table bookings.
//!
//! This module provides the reservation record itself, its identifier and
//! status, the validated party size, and the two shapes a reservation takes
//! before it is stored: the raw [`ReservationDraft`] as submitted by a user
//! and the checked [`ReservationFields`] that the store accepts.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationErrors};

/// Hour used when a reservation is submitted without a time.
pub const DEFAULT_RESERVATION_HOUR: u32 = 19;

/// Returns the time assigned to drafts that leave the time unset (19:00).
///
/// # Examples
///
/// ```
/// use chrono::Timelike;
/// use mesa::reservation::default_reservation_time;
///
/// assert_eq!(default_reservation_time().hour(), 19);
/// assert_eq!(default_reservation_time().minute(), 0);
/// ```
#[must_use]
pub fn default_reservation_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_RESERVATION_HOUR, 0, 0).unwrap_or_default()
}

/// A unique, stable reservation identifier assigned by the store.
///
/// # Examples
///
/// ```
/// use mesa::ReservationId;
///
/// let id: ReservationId = "4".parse().unwrap();
/// assert_eq!(id, ReservationId::new(4));
/// assert_eq!(id.to_string(), "4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(u64);

impl ReservationId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| crate::Error::InvalidValue {
                field: "id".into(),
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Lifecycle status of a reservation.
///
/// Parsing is case-insensitive and also accepts the Spanish labels shown by
/// the restaurant's front desk (`Pendiente`, `Confirmada`, `Cancelada`).
///
/// # Examples
///
/// ```
/// use mesa::Status;
///
/// assert_eq!("Confirmada".parse::<Status>().unwrap(), Status::Confirmed);
/// assert_eq!("PENDING".parse::<Status>().unwrap(), Status::Pending);
/// assert_eq!(Status::Cancelled.to_string(), "cancelled");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Awaiting confirmation. Every new reservation starts here.
    #[default]
    Pending,
    /// Confirmed by the restaurant.
    Confirmed,
    /// Cancelled but still on record.
    Cancelled,
}

impl Status {
    /// All statuses in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Confirmed, Self::Cancelled];

    /// Returns the lowercase name used in storage and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "pendiente" => Ok(Self::Pending),
            "confirmed" | "confirmada" => Ok(Self::Confirmed),
            "cancelled" | "canceled" | "cancelada" => Ok(Self::Cancelled),
            _ => Err(crate::Error::InvalidValue {
                field: "status".into(),
                value: s.to_string(),
                reason: "expected pending, confirmed or cancelled".into(),
            }),
        }
    }
}

/// Number of guests for a reservation (1-10).
///
/// # Examples
///
/// ```
/// use mesa::PartySize;
///
/// let size = PartySize::try_from(4).unwrap();
/// assert_eq!(size.value(), 4);
///
/// assert!(PartySize::try_from(0).is_err());
/// assert!(PartySize::try_from(11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PartySize(u8);

impl PartySize {
    /// The smallest accepted party.
    pub const MIN: i64 = 1;

    /// The largest accepted party.
    pub const MAX: i64 = 10;

    /// Returns the number of guests.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` if `value` is an acceptable party size.
    #[must_use]
    pub const fn in_range(value: i64) -> bool {
        value >= Self::MIN && value <= Self::MAX
    }
}

impl TryFrom<i64> for PartySize {
    type Error = InvalidPartySizeError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if Self::in_range(value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidPartySizeError {
                value,
                reason: format!(
                    "party size must be between {} and {}",
                    Self::MIN,
                    Self::MAX
                ),
            })
        }
    }
}

impl From<PartySize> for i64 {
    fn from(size: PartySize) -> Self {
        Self::from(size.0)
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for out-of-range party sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPartySizeError {
    /// The rejected value.
    pub value: i64,
    /// The reason it was rejected.
    pub reason: String,
}

impl fmt::Display for InvalidPartySizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid party size {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidPartySizeError {}

/// A stored reservation.
///
/// Records are only produced by the store (which assigns the id), by the
/// database layer when loading, or through [`Reservation::builder`], which
/// enforces the same invariants as the validation rules.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mesa::{PartySize, Reservation, ReservationId, Status};
///
/// let date = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
/// let reservation = Reservation::builder(ReservationId::new(1), "Ana", "ana@x.com", date)
///     .party_size(PartySize::try_from(3).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(reservation.status(), Status::Pending);
/// assert_eq!(reservation.party_size().value(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    id: ReservationId,
    customer_name: String,
    customer_email: String,
    reservation_date: NaiveDate,
    reservation_time: NaiveTime,
    party_size: PartySize,
    status: Status,
}

impl Reservation {
    /// Creates a new reservation builder.
    #[must_use]
    pub fn builder(
        id: ReservationId,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        reservation_date: NaiveDate,
    ) -> ReservationBuilder {
        ReservationBuilder {
            id,
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            reservation_date,
            reservation_time: None,
            party_size: None,
            status: Status::Pending,
        }
    }

    pub(crate) fn from_fields(id: ReservationId, fields: ReservationFields) -> Self {
        Self {
            id,
            customer_name: fields.customer_name,
            customer_email: fields.customer_email,
            reservation_date: fields.reservation_date,
            reservation_time: fields.reservation_time,
            party_size: fields.party_size,
            status: fields.status.unwrap_or_default(),
        }
    }

    /// Returns the reservation id.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the customer's name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the customer's email address.
    #[must_use]
    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    /// Returns the reserved date.
    #[must_use]
    pub const fn reservation_date(&self) -> NaiveDate {
        self.reservation_date
    }

    /// Returns the reserved time of day.
    #[must_use]
    pub const fn reservation_time(&self) -> NaiveTime {
        self.reservation_time
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn party_size(&self) -> PartySize {
        self.party_size
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} on {} at {} for {} ({})",
            self.id,
            self.customer_name,
            self.reservation_date,
            self.reservation_time.format("%H:%M"),
            self.party_size,
            self.status
        )
    }
}

/// Builder for creating `Reservation` instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: ReservationId,
    customer_name: String,
    customer_email: String,
    reservation_date: NaiveDate,
    reservation_time: Option<NaiveTime>,
    party_size: Option<PartySize>,
    status: Status,
}

impl ReservationBuilder {
    /// Sets the time of day. Defaults to 19:00.
    #[must_use]
    pub const fn time(mut self, time: NaiveTime) -> Self {
        self.reservation_time = Some(time);
        self
    }

    /// Sets the party size. Defaults to 2.
    #[must_use]
    pub const fn party_size(mut self, party_size: PartySize) -> Self {
        self.party_size = Some(party_size);
        self
    }

    /// Sets the status. Defaults to pending.
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Builds the reservation.
    ///
    /// The customer name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the email address does not
    /// match the accepted shape.
    pub fn build(self) -> Result<Reservation, ValidationError> {
        let customer_name = self.customer_name.trim().to_string();
        if customer_name.is_empty() {
            return Err(ValidationError {
                field: "customerName".into(),
                message: "customer name must be non-empty after trimming whitespace".into(),
            });
        }

        if !validation::is_valid_email(&self.customer_email) {
            return Err(ValidationError {
                field: "customerEmail".into(),
                message: format!("'{}' is not a valid email address", self.customer_email),
            });
        }

        Ok(Reservation {
            id: self.id,
            customer_name,
            customer_email: self.customer_email,
            reservation_date: self.reservation_date,
            reservation_time: self.reservation_time.unwrap_or_else(default_reservation_time),
            party_size: self.party_size.unwrap_or(PartySize(2)),
            status: self.status,
        })
    }
}

/// A reservation's field values as submitted, before validation.
///
/// Every field holds exactly what the user entered, so out-of-range party
/// sizes and malformed emails are representable here and only here.
///
/// # Examples
///
/// ```
/// use mesa::ReservationDraft;
///
/// let draft = ReservationDraft::default();
/// assert!(draft.id.is_none());
/// assert_eq!(draft.party_size, 2);
/// assert!(draft.validated().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationDraft {
    /// Id of the record being edited; `None` when creating.
    pub id: Option<ReservationId>,
    /// Customer name as typed.
    pub customer_name: String,
    /// Customer email as typed.
    pub customer_email: String,
    /// Requested date, if one was picked.
    pub reservation_date: Option<NaiveDate>,
    /// Requested time; `None` falls back to 19:00.
    pub reservation_time: Option<NaiveTime>,
    /// Requested number of guests.
    pub party_size: i64,
    /// Requested status. Ignored when creating.
    pub status: Status,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            id: None,
            customer_name: String::new(),
            customer_email: String::new(),
            reservation_date: None,
            reservation_time: Some(default_reservation_time()),
            party_size: 2,
            status: Status::Pending,
        }
    }
}

impl From<&Reservation> for ReservationDraft {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: Some(reservation.id),
            customer_name: reservation.customer_name.clone(),
            customer_email: reservation.customer_email.clone(),
            reservation_date: Some(reservation.reservation_date),
            reservation_time: Some(reservation.reservation_time),
            party_size: i64::from(reservation.party_size),
            status: reservation.status,
        }
    }
}

impl ReservationDraft {
    /// Runs every validation rule and converts the draft into checked fields.
    ///
    /// # Errors
    ///
    /// Returns the full per-field error mapping if any rule is violated.
    pub fn validated(&self) -> Result<ReservationFields, ValidationErrors> {
        let errors = validation::validate(self);
        match (
            self.reservation_date,
            PartySize::try_from(self.party_size),
        ) {
            (Some(reservation_date), Ok(party_size)) if errors.is_empty() => Ok(ReservationFields {
                customer_name: self.customer_name.trim().to_string(),
                customer_email: self.customer_email.clone(),
                reservation_date,
                reservation_time: self
                    .reservation_time
                    .unwrap_or_else(default_reservation_time),
                party_size,
                status: Some(self.status),
            }),
            _ => Err(errors),
        }
    }
}

/// The complete set of mutable reservation fields, already validated.
///
/// This is the only input the store accepts, so a record that breaks the
/// party-size or email invariants cannot reach it. `status` is optional:
/// `None` leaves an existing record's status untouched on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationFields {
    customer_name: String,
    customer_email: String,
    reservation_date: NaiveDate,
    reservation_time: NaiveTime,
    party_size: PartySize,
    status: Option<Status>,
}

impl ReservationFields {
    /// Replaces the status carried by these fields.
    #[must_use]
    pub fn with_status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }

    /// Returns the customer's name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the customer's email address.
    #[must_use]
    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    /// Returns the reserved date.
    #[must_use]
    pub const fn reservation_date(&self) -> NaiveDate {
        self.reservation_date
    }

    /// Returns the reserved time of day.
    #[must_use]
    pub const fn reservation_time(&self) -> NaiveTime {
        self.reservation_time
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn party_size(&self) -> PartySize {
        self.party_size
    }

    /// Returns the requested status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    /// Produces the record that results from applying these fields to
    /// `existing`.
    ///
    /// Every mutable field is replaced; the id is kept, and so is the status
    /// when these fields carry none.
    #[must_use]
    pub fn apply_to(&self, existing: &Reservation) -> Reservation {
        Reservation {
            id: existing.id,
            customer_name: self.customer_name.clone(),
            customer_email: self.customer_email.clone(),
            reservation_date: self.reservation_date,
            reservation_time: self.reservation_time,
            party_size: self.party_size,
            status: self.status.unwrap_or(existing.status),
        }
    }
}

impl From<&Reservation> for ReservationFields {
    fn from(reservation: &Reservation) -> Self {
        Self {
            customer_name: reservation.customer_name.clone(),
            customer_email: reservation.customer_email.clone(),
            reservation_date: reservation.reservation_date,
            reservation_time: reservation.reservation_time,
            party_size: reservation.party_size,
            status: Some(reservation.status),
        }
    }
}

/// The three demo reservations every fresh session starts with.
#[must_use]
pub fn seed_reservations() -> Vec<Reservation> {
    let seed = |id: u64, name: &str, email: &str, (y, m, d): (i32, u32, u32), (h, min): (u32, u32), party: u8, status: Status| {
        Reservation {
            id: ReservationId(id),
            customer_name: name.to_string(),
            customer_email: email.to_string(),
            reservation_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            reservation_time: NaiveTime::from_hms_opt(h, min, 0).unwrap_or_default(),
            party_size: PartySize(party),
            status,
        }
    };

    vec![
        seed(1, "Juan Pérez", "juan@ejemplo.com", (2025, 12, 5), (20, 0), 4, Status::Confirmed),
        seed(2, "María Lopez", "maria@ejemplo.com", (2025, 12, 6), (19, 30), 2, Status::Pending),
        seed(3, "Carlos Ruiz", "carlos@ejemplo.com", (2025, 12, 7), (18, 45), 8, Status::Cancelled),
    ]
}

/// Error type for builder validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for crate::Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}


#[cfg(all(test, feature = "property-tests"))]
mod proptests;
