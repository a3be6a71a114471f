//! The running reservation session.
//!
//! A [`Session`] owns the store, the view controller, the delete
//! confirmation gate and the provider, and routes every user intent through
//! them. Mutations land in memory first; in connected mode they are then
//! mirrored to the database.

use chrono::NaiveTime;
use log::debug;

use crate::config::Config;
use crate::controller::{View, ViewController};
use crate::error::{Error, Result};
use crate::form::ReservationForm;
use crate::gate::ConfirmationGate;
use crate::provider::{Provider, UserId};
use crate::reservation::{default_reservation_time, seed_reservations, Reservation, ReservationDraft, ReservationId};
use crate::store::ReservationStore;

/// Application state for one user.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mesa::{ReservationId, Session};
///
/// let mut session = Session::local();
/// assert_eq!(session.list().len(), 3);
///
/// let mut form = session.new_reservation();
/// form.set_customer_name("Ana");
/// form.set_customer_email("ana@x.com");
/// form.set_reservation_date(NaiveDate::from_ymd_opt(2025, 12, 10));
/// let draft = form.submit().unwrap();
///
/// let created = session.save(&draft).unwrap();
/// assert_eq!(created.id(), ReservationId::new(4));
///
/// session.request_delete(created.id());
/// session.confirm_delete();
/// assert_eq!(session.list().len(), 3);
/// ```
#[derive(Debug)]
pub struct Session {
    store: ReservationStore,
    controller: ViewController,
    gate: ConfirmationGate,
    provider: Provider,
    user_id: UserId,
    default_time: NaiveTime,
}

impl Session {
    /// Starts an offline session over the demo reservations.
    #[must_use]
    pub fn local() -> Self {
        Self::with_store(ReservationStore::with_records(seed_reservations()))
    }

    /// Starts an offline session over `store`.
    #[must_use]
    pub fn with_store(store: ReservationStore) -> Self {
        Self {
            store,
            controller: ViewController::new(),
            gate: ConfirmationGate::new(),
            provider: Provider::Local,
            user_id: UserId::LocalDemo,
            default_time: default_reservation_time(),
        }
    }

    /// Starts a session for `config`.
    ///
    /// Connects the provider, resolves the user and loads the initial
    /// reservations. Backend failures never fail startup; the session runs
    /// locally instead.
    ///
    /// # Errors
    ///
    /// Returns an error only if `config.default_time` is malformed.
    pub fn start(config: &Config) -> Result<Self> {
        let default_time = config.default_time()?;
        let mut provider = Provider::connect(config);
        let user_id = provider.sign_in(config);
        let store = provider.load_store(config.seeds_demo_data());

        debug!(
            "Session started for {user_id} ({} reservations, {})",
            store.len(),
            if provider.is_connected() { "connected" } else { "local" }
        );

        Ok(Self {
            store,
            controller: ViewController::new(),
            gate: ConfirmationGate::new(),
            provider,
            user_id,
            default_time,
        })
    }

    /// All reservations in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Reservation] {
        self.store.list()
    }

    /// Looks up a reservation.
    #[must_use]
    pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
        self.store.get(id)
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &ReservationStore {
        &self.store
    }

    /// The current view.
    #[must_use]
    pub const fn view(&self) -> &View {
        self.controller.view()
    }

    /// The resolved user identity.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns `true` when changes are mirrored to the database.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.provider.is_connected()
    }

    /// Opens a blank form using the configured default time.
    pub fn new_reservation(&mut self) -> ReservationForm {
        self.controller.new_reservation();
        let mut form = ReservationForm::new();
        form.set_reservation_time(Some(self.default_time));
        form
    }

    /// Opens a form pre-filled from reservation `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no such reservation exists; the view is
    /// left unchanged.
    pub fn edit_reservation(&mut self, id: ReservationId) -> Result<ReservationForm> {
        let record = self.store.get(id).cloned().ok_or(Error::NotFound { id })?;
        let form = ReservationForm::edit(&record);
        self.controller.edit_reservation(record);
        Ok(form)
    }

    /// Saves a submitted draft and returns to the list.
    ///
    /// # Errors
    ///
    /// Propagates [`ViewController::save`] errors. Sync failures are logged,
    /// not returned.
    pub fn save(&mut self, draft: &ReservationDraft) -> Result<Reservation> {
        let saved = self.controller.save(&mut self.store, draft)?;
        self.provider.sync_upsert(&saved);
        if draft.id.is_none() {
            self.provider.sync_counter(self.store.next_id());
        }
        Ok(saved)
    }

    /// Closes the form without saving.
    pub fn cancel(&mut self) {
        self.controller.cancel();
    }

    /// Marks reservation `id` for deletion.
    pub fn request_delete(&mut self, id: ReservationId) {
        self.gate.request_delete(id);
    }

    /// The reservation awaiting deletion, if any.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<ReservationId> {
        self.gate.pending()
    }

    /// Deletes the pending reservation.
    pub fn confirm_delete(&mut self) -> Option<Reservation> {
        let removed = self.gate.confirm(&mut self.store)?;
        self.provider.sync_delete(removed.id());
        Some(removed)
    }

    /// Keeps the pending reservation.
    pub fn cancel_delete(&mut self) {
        self.gate.cancel();
    }
}
