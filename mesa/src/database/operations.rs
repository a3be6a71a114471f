//! Database CRUD operations for reservations and metadata.

use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::error::{Error, Result};
use crate::{PartySize, Reservation, ReservationId, Status};

use super::connection::Database;
use super::schema::{
    DATE_FORMAT, DELETE_RESERVATION, NEXT_ID_KEY, SEEDED_KEY, SELECT_METADATA, TIME_FORMAT,
    UPSERT_METADATA, UPSERT_RESERVATION, USER_ID_KEY,
};

const LIST_RESERVATIONS: &str = r"
    SELECT id, customer_name, customer_email, reservation_date, reservation_time, party_size, status
    FROM reservations
    ORDER BY id
";

fn conversion_error(
    column: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

/// Deserializes a reservation from a database row.
///
/// Expects columns in this order: id, `customer_name`, `customer_email`,
/// `reservation_date`, `reservation_time`, `party_size`, status.
#[allow(clippy::cast_sign_loss)]
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let customer_name: String = row.get(1)?;
    let customer_email: String = row.get(2)?;
    let date: String = row.get(3)?;
    let time: String = row.get(4)?;
    let party_size: i64 = row.get(5)?;
    let status: String = row.get(6)?;

    let date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| conversion_error(3, e))?;
    let time = NaiveTime::parse_from_str(&time, TIME_FORMAT).map_err(|e| conversion_error(4, e))?;
    let party_size = PartySize::try_from(party_size).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, Type::Integer, Box::new(e))
    })?;
    let status = status.parse::<Status>().map_err(|e| conversion_error(6, e))?;

    Reservation::builder(ReservationId::new(id as u64), customer_name, customer_email, date)
        .time(time)
        .party_size(party_size)
        .status(status)
        .build()
        .map_err(|e| conversion_error(1, e))
}

impl Database {
    /// Creates or replaces a reservation, keyed by its id.
    ///
    /// Runs in an IMMEDIATE transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, the insert
    /// fails, or the transaction cannot be committed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mesa::database::{Database, DatabaseConfig};
    /// use mesa::seed_reservations;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/mesa.db")).unwrap();
    /// db.upsert_reservation(&seed_reservations()[0]).unwrap();
    /// ```
    pub fn upsert_reservation(&mut self, reservation: &Reservation) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        Self::upsert_reservation_simple(&tx, reservation)?;
        tx.commit()?;
        Ok(())
    }

    /// Creates or replaces a reservation without opening a transaction.
    ///
    /// Intended for use inside an existing transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    #[allow(clippy::cast_possible_wrap)]
    pub fn upsert_reservation_simple(conn: &Connection, reservation: &Reservation) -> Result<()> {
        conn.execute(
            UPSERT_RESERVATION,
            params![
                reservation.id().value() as i64,
                reservation.customer_name(),
                reservation.customer_email(),
                reservation.reservation_date().format(DATE_FORMAT).to_string(),
                reservation.reservation_time().format(TIME_FORMAT).to_string(),
                i64::from(reservation.party_size()),
                reservation.status().as_str(),
            ],
        )?;
        Ok(())
    }

    /// Deletes a reservation by id.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation existed and was deleted
    /// - `Ok(false)` if it did not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    #[allow(clippy::cast_possible_wrap)]
    pub fn delete_reservation(&mut self, id: ReservationId) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let rows_affected = tx.execute(DELETE_RESERVATION, params![id.value() as i64])?;
        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Lists every reservation in insertion (id) order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub fn list_all_reservations(conn: &Connection) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_RESERVATIONS)?;
        let reservations = stmt
            .query_map([], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(reservations)
    }

    /// Reads a metadata value.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_metadata(conn: &Connection, key: &str) -> Result<Option<String>> {
        let value = conn
            .query_row(SELECT_METADATA, [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    /// Writes a metadata value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_metadata(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(UPSERT_METADATA, [key, value])?;
        Ok(())
    }

    /// Returns the persisted id counter, if one was ever stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored value is not an
    /// integer.
    pub fn next_id(conn: &Connection) -> Result<Option<u64>> {
        Self::get_metadata(conn, NEXT_ID_KEY)?
            .map(|value| {
                value.parse::<u64>().map_err(|e| Error::InvalidValue {
                    field: NEXT_ID_KEY.into(),
                    value,
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    /// Persists the id counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_next_id(&mut self, next_id: ReservationId) -> Result<()> {
        Self::set_metadata(&self.conn, NEXT_ID_KEY, &next_id.to_string())
    }

    /// Returns the stored user id, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn user_id(conn: &Connection) -> Result<Option<String>> {
        Self::get_metadata(conn, USER_ID_KEY)
    }

    /// Stores the user id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_user_id(&mut self, user_id: &str) -> Result<()> {
        Self::set_metadata(&self.conn, USER_ID_KEY, user_id)
    }

    /// Returns `true` once the demo reservations have been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn is_seeded(conn: &Connection) -> Result<bool> {
        Ok(Self::get_metadata(conn, SEEDED_KEY)?.is_some_and(|value| value == "1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, create_test_reservation};

    #[test]
    fn test_upsert_and_list_reservation() {
        let mut db = create_test_database();
        let reservation = create_test_reservation(1, "Ana");

        db.upsert_reservation(&reservation).unwrap();

        let all = Database::list_all_reservations(db.connection()).unwrap();
        assert_eq!(all, vec![reservation]);
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let mut db = create_test_database();
        db.upsert_reservation(&create_test_reservation(1, "Ana")).unwrap();
        db.upsert_reservation(&create_test_reservation(1, "Beatriz")).unwrap();

        let all = Database::list_all_reservations(db.connection()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].customer_name(), "Beatriz");
    }

    #[test]
    fn test_seed_records_round_trip() {
        let mut db = create_test_database();
        let seeds = crate::seed_reservations();
        for seed in &seeds {
            db.upsert_reservation(seed).unwrap();
        }
        assert_eq!(Database::list_all_reservations(db.connection()).unwrap(), seeds);
    }

    #[test]
    fn test_delete_reservation() {
        let mut db = create_test_database();
        db.upsert_reservation(&create_test_reservation(1, "Ana")).unwrap();

        assert!(db.delete_reservation(ReservationId::new(1)).unwrap());
        assert!(!db.delete_reservation(ReservationId::new(1)).unwrap());
        assert!(Database::list_all_reservations(db.connection())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_list_orders_by_id() {
        let mut db = create_test_database();
        db.upsert_reservation(&create_test_reservation(3, "Carla")).unwrap();
        db.upsert_reservation(&create_test_reservation(1, "Ana")).unwrap();
        db.upsert_reservation(&create_test_reservation(2, "Bea")).unwrap();

        let ids: Vec<u64> = Database::list_all_reservations(db.connection())
            .unwrap()
            .iter()
            .map(|r| r.id().value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_malformed_row_is_rejected() {
        let db = create_test_database();
        db.connection()
            .execute(
                "INSERT INTO reservations VALUES (1, 'Ana', 'not-an-email', '2025-12-10', '19:00:00', 2, 'pending')",
                [],
            )
            .unwrap();

        assert!(Database::list_all_reservations(db.connection()).is_err());
    }

    #[test]
    fn test_metadata_round_trip() {
        let mut db = create_test_database();
        assert_eq!(Database::next_id(db.connection()).unwrap(), None);
        assert_eq!(Database::user_id(db.connection()).unwrap(), None);
        assert!(!Database::is_seeded(db.connection()).unwrap());

        db.set_next_id(ReservationId::new(12)).unwrap();
        db.set_user_id("anon-1f").unwrap();

        assert_eq!(Database::next_id(db.connection()).unwrap(), Some(12));
        assert_eq!(
            Database::user_id(db.connection()).unwrap().as_deref(),
            Some("anon-1f")
        );
    }

    #[test]
    fn test_next_id_rejects_garbage() {
        let db = create_test_database();
        Database::set_metadata(db.connection(), NEXT_ID_KEY, "many").unwrap();
        assert!(Database::next_id(db.connection()).is_err());
    }
}
