//! End-to-end tests for the reservation flow.
//!
//! These tests drive a [`Session`] the way the presentation layer does:
//! open a form, submit a draft, save it, and request or confirm deletions.
//! Everything runs against the in-memory provider.

mod common;

use chrono::NaiveDate;
use common::DraftFixture;
use mesa::validation::Field;
use mesa::{Error, ReservationId, ReservationStore, Session, Status, View};

// ============================================================================
// Creating
// ============================================================================

#[test]
fn test_create_from_seed_assigns_next_id() {
    let mut session = Session::local();
    let mut form = session.new_reservation();
    form.set_customer_name("Ana");
    form.set_customer_email("ana@x.com");
    form.set_reservation_date(NaiveDate::from_ymd_opt(2025, 12, 10));
    form.set_party_size(3);

    let created = session.save(&form.submit().unwrap()).unwrap();

    assert_eq!(session.list().len(), 4);
    assert_eq!(created.id(), ReservationId::new(4));
    assert_eq!(created.status(), Status::Pending);
    assert_eq!(created.party_size().value(), 3);
}

#[test]
fn test_create_forces_pending() {
    let mut session = Session::local();
    session.new_reservation();

    for status in Status::ALL {
        session.new_reservation();
        let created = session
            .save(&DraftFixture::new().with_status(status).build())
            .unwrap();
        assert_eq!(created.status(), Status::Pending);
    }
}

#[test]
fn test_ids_strictly_increase() {
    let mut session = Session::with_store(ReservationStore::new());
    let mut previous = 0;

    for i in 0..20 {
        session.new_reservation();
        let created = session
            .save(&DraftFixture::new().with_party_size(1 + i % 10).build())
            .unwrap();
        assert!(created.id().value() > previous);
        previous = created.id().value();

        if i % 3 == 0 {
            session.request_delete(created.id());
            session.confirm_delete();
        }
    }
    assert_eq!(previous, 20);
}

// ============================================================================
// Updating
// ============================================================================

#[test]
fn test_status_update_keeps_position_and_fields() {
    let mut session = Session::local();
    let before = session.list().to_vec();

    let mut form = session.edit_reservation(ReservationId::new(2)).unwrap();
    form.set_status(Status::Confirmed);
    session.save(&form.submit().unwrap()).unwrap();

    let after = session.list();
    assert_eq!(after.len(), before.len());
    assert_eq!(after.iter().filter(|r| r.id() == ReservationId::new(2)).count(), 1);

    let updated = &after[1];
    assert_eq!(updated.status(), Status::Confirmed);
    assert_eq!(updated.customer_name(), before[1].customer_name());
    assert_eq!(updated.customer_email(), before[1].customer_email());
    assert_eq!(updated.reservation_date(), before[1].reservation_date());
    assert_eq!(updated.reservation_time(), before[1].reservation_time());
    assert_eq!(updated.party_size(), before[1].party_size());
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
}

#[test]
fn test_update_of_deleted_record_is_not_found() {
    let mut session = Session::local();
    let form = session.edit_reservation(ReservationId::new(3)).unwrap();

    session.request_delete(ReservationId::new(3));
    session.confirm_delete();

    let err = session.save(form.draft()).unwrap_err();
    assert!(matches!(err, Error::NotFound { id } if id == ReservationId::new(3)));
    assert!(session.view().is_editing());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_blank_names_are_rejected() {
    for name in ["", " ", "\t", "   \n"] {
        let mut session = Session::local();
        session.new_reservation();
        let err = session
            .save(&DraftFixture::new().with_name(name).build())
            .unwrap_err();
        assert!(err.validation_errors().unwrap().contains(Field::CustomerName));
        assert_eq!(session.list().len(), 3);
    }
}

#[test]
fn test_party_size_bounds() {
    for size in -3..=13 {
        let mut session = Session::local();
        session.new_reservation();
        let result = session.save(&DraftFixture::new().with_party_size(size).build());

        if (1..=10).contains(&size) {
            assert!(result.is_ok(), "size {size} should be accepted");
        } else {
            let err = result.unwrap_err();
            assert!(err.validation_errors().unwrap().contains(Field::PartySize));
        }
    }
}

#[test]
fn test_all_violations_reported_together() {
    let mut session = Session::local();
    let mut form = session.new_reservation();
    form.set_party_size(0);

    let errors = form.submit().unwrap_err().clone();
    assert_eq!(errors.len(), 4);

    form.set_customer_email("ana@x.com");
    assert_eq!(form.errors().len(), 3);
    assert!(!form.errors().contains(Field::CustomerEmail));
    assert!(form.errors().contains(Field::CustomerName));
}

#[test]
fn test_rejected_email_shapes() {
    for email in ["ana", "ana@x", "ana@x.c", "ana@x.comma", "@x.com", "ana x@x.com"] {
        let mut session = Session::local();
        session.new_reservation();
        let err = session
            .save(&DraftFixture::new().with_email(email).build())
            .unwrap_err();
        assert!(
            err.validation_errors().unwrap().contains(Field::CustomerEmail),
            "{email} should be rejected"
        );
    }
}

// ============================================================================
// Deleting
// ============================================================================

#[test]
fn test_last_delete_request_wins() {
    let mut session = Session::local();
    session.request_delete(ReservationId::new(1));
    session.request_delete(ReservationId::new(2));

    let removed = session.confirm_delete().unwrap();
    assert_eq!(removed.id(), ReservationId::new(2));
    assert!(session.get(ReservationId::new(1)).is_some());
    assert!(session.get(ReservationId::new(2)).is_none());
}

#[test]
fn test_cancel_delete_keeps_record() {
    let mut session = Session::local();
    let original = session.get(ReservationId::new(2)).cloned().unwrap();

    session.request_delete(ReservationId::new(2));
    session.cancel_delete();

    assert_eq!(session.get(ReservationId::new(2)), Some(&original));
    assert_eq!(session.list().len(), 3);
}

#[test]
fn test_second_delete_is_not_found() {
    let mut store = ReservationStore::with_records(mesa::seed_reservations());
    store.delete(ReservationId::new(1)).unwrap();
    assert!(store.delete(ReservationId::new(1)).unwrap_err().is_not_found());
}

#[test]
fn test_confirm_after_external_removal_is_silent() {
    let mut session = Session::local();
    session.request_delete(ReservationId::new(1));
    session.confirm_delete();

    session.request_delete(ReservationId::new(1));
    assert!(session.confirm_delete().is_none());
    assert_eq!(session.list().len(), 2);
}

// ============================================================================
// Views
// ============================================================================

#[test]
fn test_view_transitions() {
    let mut session = Session::local();
    assert_eq!(session.view(), &View::Listing);

    session.new_reservation();
    assert_eq!(session.view(), &View::Editing(None));

    session.edit_reservation(ReservationId::new(1)).unwrap();
    assert_eq!(
        session.view().edit_target().map(mesa::Reservation::id),
        Some(ReservationId::new(1))
    );

    session.cancel();
    assert_eq!(session.view(), &View::Listing);

    let err = session.save(&DraftFixture::new().build()).unwrap_err();
    assert!(matches!(err, Error::InvalidTransition { action: "save", .. }));
}
