//! View controller for the reservation screens.
//!
//! The controller tracks whether the user is looking at the list or editing
//! a draft, and decides whether a submitted draft becomes a create or an
//! update on the store.

use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationDraft};
use crate::store::ReservationStore;

/// The screen currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    /// The reservation list.
    #[default]
    Listing,
    /// The form, either blank (`None`) or pre-filled from a record.
    Editing(Option<Reservation>),
}

impl View {
    /// Returns `true` while a form is open.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Returns the record being edited, if any.
    #[must_use]
    pub const fn edit_target(&self) -> Option<&Reservation> {
        match self {
            Self::Editing(Some(record)) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listing => f.write_str("listing"),
            Self::Editing(None) => f.write_str("creating a reservation"),
            Self::Editing(Some(record)) => write!(f, "editing reservation {}", record.id()),
        }
    }
}

/// Two-state controller: listing or editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewController {
    view: View,
}

impl ViewController {
    /// Creates a controller showing the list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current view.
    #[must_use]
    pub const fn view(&self) -> &View {
        &self.view
    }

    /// Opens a blank form. Replaces any form already open.
    pub fn new_reservation(&mut self) {
        debug!("{} -> creating a reservation", self.view);
        self.view = View::Editing(None);
    }

    /// Opens a form pre-filled from `record`. Replaces any form already open.
    pub fn edit_reservation(&mut self, record: Reservation) {
        debug!("{} -> editing reservation {}", self.view, record.id());
        self.view = View::Editing(Some(record));
    }

    /// Submits `draft` from the open form.
    ///
    /// The draft is validated first. A draft without an id creates a new
    /// record; one with an id updates that record. On success the controller
    /// returns to the list.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidTransition`] if no form is open.
    /// - [`Error::ValidationFailed`] if any rule is violated; the store is
    ///   untouched and the form stays open.
    /// - [`Error::NotFound`] if the record being updated no longer exists;
    ///   the form stays open.
    pub fn save(&mut self, store: &mut ReservationStore, draft: &ReservationDraft) -> Result<Reservation> {
        if !self.view.is_editing() {
            return Err(Error::InvalidTransition {
                action: "save",
                view: self.view.to_string(),
            });
        }

        let fields = draft.validated()?;
        let saved = match draft.id {
            None => store.create(fields)?,
            Some(id) => store.update(id, &fields)?,
        };

        debug!("{} -> listing", self.view);
        self.view = View::Listing;
        Ok(saved)
    }

    /// Closes the form without touching the store.
    pub fn cancel(&mut self) {
        debug!("{} -> listing (cancelled)", self.view);
        self.view = View::Listing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::{seed_reservations, ReservationId, Status};
    use crate::validation::Field;
    use chrono::NaiveDate;

    fn valid_draft() -> ReservationDraft {
        ReservationDraft {
            customer_name: "Ana".to_string(),
            customer_email: "ana@x.com".to_string(),
            reservation_date: NaiveDate::from_ymd_opt(2025, 12, 10),
            party_size: 3,
            ..ReservationDraft::default()
        }
    }

    fn seeded() -> ReservationStore {
        ReservationStore::with_records(seed_reservations())
    }

    #[test]
    fn test_initial_view_is_listing() {
        assert_eq!(ViewController::new().view(), &View::Listing);
    }

    #[test]
    fn test_save_new_creates_and_returns_to_listing() {
        let mut store = seeded();
        let mut controller = ViewController::new();
        controller.new_reservation();

        let created = controller.save(&mut store, &valid_draft()).unwrap();
        assert_eq!(created.id(), ReservationId::new(4));
        assert_eq!(created.status(), Status::Pending);
        assert_eq!(controller.view(), &View::Listing);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_save_invalid_stays_editing() {
        let mut store = seeded();
        let before = store.clone();
        let mut controller = ViewController::new();
        controller.new_reservation();

        let draft = ReservationDraft {
            party_size: 11,
            ..valid_draft()
        };
        let err = controller.save(&mut store, &draft).unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::PartySize));
        assert_eq!(controller.view(), &View::Editing(None));
        assert_eq!(store, before);
    }

    #[test]
    fn test_save_existing_updates_in_place() {
        let mut store = seeded();
        let mut controller = ViewController::new();
        let record = store.get(ReservationId::new(2)).unwrap().clone();
        controller.edit_reservation(record.clone());

        let mut draft = ReservationDraft::from(&record);
        draft.customer_name = "María López".to_string();
        draft.status = Status::Confirmed;

        let updated = controller.save(&mut store, &draft).unwrap();
        assert_eq!(updated.id(), ReservationId::new(2));
        assert_eq!(updated.status(), Status::Confirmed);
        assert_eq!(store.list()[1].customer_name(), "María López");
        assert_eq!(controller.view(), &View::Listing);
    }

    #[test]
    fn test_save_vanished_record_stays_editing() {
        let mut store = seeded();
        let mut controller = ViewController::new();
        let record = store.get(ReservationId::new(1)).unwrap().clone();
        controller.edit_reservation(record.clone());
        store.delete(ReservationId::new(1)).unwrap();

        let err = controller
            .save(&mut store, &ReservationDraft::from(&record))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(controller.view().edit_target(), Some(&record));
    }

    #[test]
    fn test_save_while_listing_is_rejected() {
        let mut store = seeded();
        let mut controller = ViewController::new();
        let err = controller.save(&mut store, &valid_draft()).unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { action: "save", .. }));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_cancel_returns_to_listing_without_mutation() {
        let mut store = seeded();
        let before = store.clone();
        let mut controller = ViewController::new();
        controller.edit_reservation(store.list()[0].clone());
        controller.cancel();
        assert_eq!(controller.view(), &View::Listing);
        assert_eq!(store, before);

        let err = controller.save(&mut store, &valid_draft()).unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { .. }));
    }

    #[test]
    fn test_new_while_editing_replaces_target() {
        let store = seeded();
        let mut controller = ViewController::new();
        controller.edit_reservation(store.list()[0].clone());
        controller.new_reservation();
        assert_eq!(controller.view(), &View::Editing(None));

        controller.edit_reservation(store.list()[2].clone());
        assert_eq!(
            controller.view().edit_target().map(Reservation::id),
            Some(ReservationId::new(3))
        );
    }

    #[test]
    fn test_view_display() {
        let record = seed_reservations().remove(0);
        assert_eq!(View::Listing.to_string(), "listing");
        assert_eq!(View::Editing(Some(record)).to_string(), "editing reservation 1");
    }
}
