#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # mesa
//!
//! Reservation state management for the Casa Caribe restaurant.
//!
//! This library keeps the list of table reservations, validates drafts
//! entered through a form, and drives the listing/editing flow along with a
//! two-step delete confirmation. A session optionally mirrors every change
//! to a SQLite database; without one it runs entirely in memory.
//!
//! ## Core Types
//!
//! - [`Reservation`], [`ReservationDraft`] and [`ReservationId`]: reservation records
//! - [`ReservationStore`]: ordered collection plus id counter
//! - [`ViewController`] and [`ConfirmationGate`]: the two state machines
//! - [`Session`]: ties the above to a [`Provider`]
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use mesa::{ReservationId, Session, Status};
//!
//! let mut session = Session::local();
//! let mut form = session.edit_reservation(ReservationId::new(1)).unwrap();
//! form.set_status(Status::Confirmed);
//!
//! let draft = form.submit().unwrap();
//! let saved = session.save(&draft).unwrap();
//! assert_eq!(saved.status(), Status::Confirmed);
//! ```

pub mod config;
pub mod controller;
pub mod database;
pub mod error;
pub mod form;
pub mod gate;
pub mod logging;
pub mod provider;
pub mod reservation;
pub mod session;
pub mod store;
pub mod validation;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use controller::{View, ViewController};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use form::ReservationForm;
pub use gate::{ConfirmationGate, GateState};
pub use logging::{init_logger, LogLevel, Logger};
pub use provider::{Provider, UserId};
pub use reservation::{
    seed_reservations, PartySize, Reservation, ReservationBuilder, ReservationDraft,
    ReservationFields, ReservationId, Status,
};
pub use session::Session;
pub use store::ReservationStore;
pub use validation::{Field, ValidationErrors};
