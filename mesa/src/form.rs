//! Reservation form state.
//!
//! A [`ReservationForm`] holds the draft being edited together with the
//! errors from the last submission attempt. Editing a field clears that
//! field's error and nothing else, so the remaining messages stay visible
//! until the next submit.

use chrono::{NaiveDate, NaiveTime};

use crate::reservation::{Reservation, ReservationDraft, Status};
use crate::validation::{self, Field, ValidationErrors};

/// A draft under edit plus its current per-field errors.
///
/// # Examples
///
/// ```
/// use mesa::form::ReservationForm;
/// use mesa::validation::Field;
///
/// let mut form = ReservationForm::new();
/// assert!(form.submit().is_err());
/// assert!(form.errors().contains(Field::CustomerName));
///
/// form.set_customer_name("Ana");
/// assert!(!form.errors().contains(Field::CustomerName));
/// assert!(form.errors().contains(Field::CustomerEmail));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationForm {
    draft: ReservationDraft,
    errors: ValidationErrors,
}

impl ReservationForm {
    /// Creates a blank form for a new reservation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form pre-filled from an existing record.
    #[must_use]
    pub fn edit(reservation: &Reservation) -> Self {
        Self {
            draft: ReservationDraft::from(reservation),
            errors: ValidationErrors::default(),
        }
    }

    /// Returns `true` if the form edits an existing record.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.draft.id.is_some()
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    /// Returns the errors from the last submission.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Consumes the form, returning its draft.
    #[must_use]
    pub fn into_draft(self) -> ReservationDraft {
        self.draft
    }

    /// Sets the customer name.
    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.draft.customer_name = name.into();
        self.errors.remove(Field::CustomerName);
    }

    /// Sets the customer email.
    pub fn set_customer_email(&mut self, email: impl Into<String>) {
        self.draft.customer_email = email.into();
        self.errors.remove(Field::CustomerEmail);
    }

    /// Sets or clears the reservation date.
    pub fn set_reservation_date(&mut self, date: Option<NaiveDate>) {
        self.draft.reservation_date = date;
        self.errors.remove(Field::ReservationDate);
    }

    /// Sets or clears the reservation time.
    pub fn set_reservation_time(&mut self, time: Option<NaiveTime>) {
        self.draft.reservation_time = time;
    }

    /// Sets the party size.
    pub fn set_party_size(&mut self, party_size: i64) {
        self.draft.party_size = party_size;
        self.errors.remove(Field::PartySize);
    }

    /// Sets the status.
    pub fn set_status(&mut self, status: Status) {
        self.draft.status = status;
    }

    /// Re-runs every rule and yields the draft when none is violated.
    ///
    /// # Errors
    ///
    /// Returns the full error mapping, which is also kept on the form.
    pub fn submit(&mut self) -> Result<ReservationDraft, &ValidationErrors> {
        self.errors = validation::validate(&self.draft);
        if self.errors.is_empty() {
            Ok(self.draft.clone())
        } else {
            Err(&self.errors)
        }
    }
}
