//! Two-phase confirmation for deletions.

use log::debug;

use crate::reservation::{Reservation, ReservationId};
use crate::store::ReservationStore;

/// State of the confirmation gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GateState {
    /// Nothing awaits confirmation.
    #[default]
    Idle,
    /// A deletion of the given reservation awaits confirmation.
    PendingConfirmation(ReservationId),
}

/// Holds a requested deletion until it is confirmed or cancelled.
///
/// A second request before confirmation replaces the first.
///
/// # Examples
///
/// ```
/// use mesa::{seed_reservations, ConfirmationGate, ReservationId, ReservationStore};
///
/// let mut store = ReservationStore::with_records(seed_reservations());
/// let mut gate = ConfirmationGate::new();
///
/// gate.request_delete(ReservationId::new(2));
/// let removed = gate.confirm(&mut store).unwrap();
/// assert_eq!(removed.id(), ReservationId::new(2));
/// assert_eq!(store.len(), 2);
/// assert!(gate.pending().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmationGate {
    state: GateState,
}

impl ConfirmationGate {
    /// Creates an idle gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> GateState {
        self.state
    }

    /// Returns the reservation awaiting confirmation, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<ReservationId> {
        match self.state {
            GateState::Idle => None,
            GateState::PendingConfirmation(id) => Some(id),
        }
    }

    /// Records `id` as the deletion target.
    pub fn request_delete(&mut self, id: ReservationId) {
        if let Some(previous) = self.pending() {
            debug!("Delete request for {previous} replaced by {id}");
        }
        self.state = GateState::PendingConfirmation(id);
    }

    /// Deletes the pending target and returns to idle.
    ///
    /// Returns `None` when the gate was idle or the target had already been
    /// removed.
    pub fn confirm(&mut self, store: &mut ReservationStore) -> Option<Reservation> {
        let GateState::PendingConfirmation(id) = std::mem::take(&mut self.state) else {
            return None;
        };

        match store.delete(id) {
            Ok(removed) => Some(removed),
            Err(e) => {
                debug!("Confirmed delete of {id} had no effect: {e}");
                None
            }
        }
    }

    /// Discards the pending target.
    pub fn cancel(&mut self) {
        self.state = GateState::Idle;
    }
}
