//! Property-based tests for reservation drafts and the party size newtype.

use super::{seed_reservations, PartySize, ReservationDraft, ReservationFields, Status};
use crate::validation::{self, Field};
use chrono::NaiveDate;
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::of((2024i32..2030, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }))
}

fn email_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9_.-]{1,12}@[a-z0-9-]{1,10}\\.[a-z]{2,4}",
        ".{0,20}",
    ]
}

fn status_strategy() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::ALL.to_vec())
}

fn draft_strategy() -> impl Strategy<Value = ReservationDraft> {
    (
        "[ a-zA-Z]{0,20}",
        email_strategy(),
        date_strategy(),
        -5i64..20,
        status_strategy(),
    )
        .prop_map(|(name, email, date, party_size, status)| ReservationDraft {
            customer_name: name,
            customer_email: email,
            reservation_date: date,
            party_size,
            status,
            ..ReservationDraft::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // PartySize accepts exactly the closed range 1..=10
    #[test]
    fn party_size_accepts_only_range(value in any::<i64>()) {
        let result = PartySize::try_from(value);
        prop_assert_eq!(result.is_ok(), (1..=10).contains(&value));
        if let Ok(size) = result {
            prop_assert_eq!(i64::from(size), value);
        }
    }

    // validated() succeeds exactly when validate() reports nothing
    #[test]
    fn validated_agrees_with_validate(draft in draft_strategy()) {
        let errors = validation::validate(&draft);
        match draft.validated() {
            Ok(fields) => {
                prop_assert!(errors.is_empty());
                prop_assert!(PartySize::in_range(i64::from(fields.party_size())));
                prop_assert!(validation::is_valid_email(fields.customer_email()));
                prop_assert!(!fields.customer_name().trim().is_empty());
            }
            Err(reported) => {
                prop_assert!(!errors.is_empty());
                prop_assert_eq!(reported, errors);
            }
        }
    }

    // Each violated rule contributes exactly one entry
    #[test]
    fn one_entry_per_violated_rule(draft in draft_strategy()) {
        let errors = validation::validate(&draft);
        let expected = Field::ALL
            .iter()
            .filter(|field| validation::validate_field(&draft, **field).is_some())
            .count();
        prop_assert_eq!(errors.len(), expected);
    }

    // apply_to never changes the id
    #[test]
    fn apply_to_keeps_id(draft in draft_strategy(), index in 0usize..3, keep_status in any::<bool>()) {
        let seeds = seed_reservations();
        let existing = &seeds[index];
        if let Ok(fields) = draft.validated() {
            let fields: ReservationFields = if keep_status { fields.with_status(None) } else { fields };
            let updated = fields.apply_to(existing);
            prop_assert_eq!(updated.id(), existing.id());
            if keep_status {
                prop_assert_eq!(updated.status(), existing.status());
            } else {
                prop_assert_eq!(updated.status(), draft.status);
            }
        }
    }
}
