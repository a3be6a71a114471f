//! Multi-statement writes that must land together.

use rusqlite::{params, TransactionBehavior};

use crate::error::Result;
use crate::{Reservation, ReservationId};

use super::connection::Database;
use super::schema::{NEXT_ID_KEY, SEEDED_KEY, UPSERT_METADATA};

impl Database {
    /// Writes the demo reservations, the counter that follows them, and the
    /// seeded flag in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails; nothing is persisted then.
    pub fn seed(&mut self, reservations: &[Reservation], next_id: ReservationId) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        for reservation in reservations {
            Self::upsert_reservation_simple(&tx, reservation)?;
        }
        tx.execute(UPSERT_METADATA, params![NEXT_ID_KEY, next_id.to_string()])?;
        tx.execute(UPSERT_METADATA, params![SEEDED_KEY, "1"])?;

        tx.commit()?;
        log::info!("Seeded {} demo reservations", reservations.len());
        Ok(())
    }
}
