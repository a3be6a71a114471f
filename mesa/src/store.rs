//! In-memory reservation store.
//!
//! The store owns the ordered collection of accepted reservations and the
//! counter that hands out ids. It performs no validation of its own: it only
//! accepts [`ReservationFields`], which can only be built from a draft that
//! passed every rule.

use log::{debug, info};

use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationFields, ReservationId, Status};

/// Ordered collection of reservations plus the next id to assign.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mesa::{ReservationDraft, ReservationStore, Status};
///
/// let mut store = ReservationStore::new();
/// let fields = ReservationDraft {
///     customer_name: "Ana".into(),
///     customer_email: "ana@x.com".into(),
///     reservation_date: NaiveDate::from_ymd_opt(2025, 12, 10),
///     party_size: 3,
///     status: Status::Confirmed,
///     ..ReservationDraft::default()
/// }
/// .validated()
/// .unwrap();
///
/// let created = store.create(fields).unwrap();
/// assert_eq!(created.id().value(), 1);
/// assert_eq!(created.status(), Status::Pending);
/// assert_eq!(store.next_id().value(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationStore {
    records: Vec<Reservation>,
    next_id: u64,
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationStore {
    /// Creates an empty store whose first id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store holding `records` in the given order.
    ///
    /// The counter starts at `records.len() + 1`, or just above the largest
    /// existing id when that is higher.
    #[must_use]
    pub fn with_records(records: Vec<Reservation>) -> Self {
        let next_id = Self::counter_floor(&records);
        Self { records, next_id }
    }

    /// Creates a store from persisted records and a persisted counter.
    ///
    /// A counter that would collide with an existing id is raised.
    #[must_use]
    pub fn restore(records: Vec<Reservation>, next_id: u64) -> Self {
        let next_id = next_id.max(Self::counter_floor(&records));
        Self { records, next_id }
    }

    fn counter_floor(records: &[Reservation]) -> u64 {
        let by_count = records.len() as u64 + 1;
        let by_max = records
            .iter()
            .map(|r| r.id().value().saturating_add(1))
            .max()
            .unwrap_or(1);
        by_count.max(by_max)
    }

    /// Returns every reservation in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Reservation] {
        &self.records
    }

    /// Returns the reservation with `id`, if any.
    #[must_use]
    pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Returns the id the next `create` will assign.
    #[must_use]
    pub const fn next_id(&self) -> ReservationId {
        ReservationId::new(self.next_id)
    }

    /// Returns the number of stored reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a new reservation built from `fields`.
    ///
    /// The record takes the next counter value and always starts pending,
    /// whatever status `fields` carries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdsExhausted`] once the counter reaches `u64::MAX`;
    /// the store is left unchanged.
    pub fn create(&mut self, fields: ReservationFields) -> Result<Reservation> {
        if self.next_id == u64::MAX {
            return Err(Error::IdsExhausted {
                next_id: self.next_id,
            });
        }
        let id = ReservationId::new(self.next_id);
        self.next_id += 1;

        let record = Reservation::from_fields(id, fields.with_status(Some(Status::Pending)));
        info!("Created reservation {id} for {}", record.customer_name());
        self.records.push(record.clone());
        Ok(record)
    }

    /// Replaces every mutable field of the reservation with `id`.
    ///
    /// The record keeps its position in the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation has `id`.
    pub fn update(&mut self, id: ReservationId, fields: &ReservationFields) -> Result<Reservation> {
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(Error::NotFound { id })?;

        *slot = fields.apply_to(slot);
        info!("Updated reservation {id}");
        Ok(slot.clone())
    }

    /// Removes the reservation with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation has `id`.
    pub fn delete(&mut self, id: ReservationId) -> Result<Reservation> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(Error::NotFound { id })?;

        let removed = self.records.remove(index);
        info!("Deleted reservation {id}");
        debug!("{} reservations remain", self.records.len());
        Ok(removed)
    }
}
