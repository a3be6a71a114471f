//! Edit command implementation.
//!
//! This module implements the `edit` command. The form is pre-filled from
//! the stored record, so fields that are not given keep their values.

use crate::error::CliError;
use crate::utils::{
    open_session, parse_date_arg, parse_id_arg, parse_status_arg, parse_time_arg, submit_form,
    warn_if_local, GlobalOptions,
};
use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use mesa::{ReservationForm, ReservationId, Status};

/// Change fields of a reservation.
#[derive(Args)]
pub struct EditCommand {
    /// Reservation id
    #[arg(value_name = "ID", value_parser = parse_id_arg)]
    pub id: ReservationId,

    /// New customer name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// New customer email
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// New time (HH:MM)
    #[arg(long, value_name = "TIME", value_parser = parse_time_arg)]
    pub time: Option<NaiveTime>,

    /// New number of guests (1-10)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub party: Option<i64>,

    /// New status (pending, confirmed, cancelled)
    #[arg(long, value_name = "STATUS", value_parser = parse_status_arg)]
    pub status: Option<Status>,
}

impl EditCommand {
    /// Execute the edit command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (mut session, _config) = open_session(global)?;
        let mut form = session.edit_reservation(self.id)?;
        self.apply(&mut form);

        let draft = submit_form(&mut form)?;
        let saved = session.save(&draft)?;
        warn_if_local(&session);

        println!("{saved}");
        Ok(())
    }

    fn apply(self, form: &mut ReservationForm) {
        if let Some(name) = self.name {
            form.set_customer_name(name);
        }
        if let Some(email) = self.email {
            form.set_customer_email(email);
        }
        if let Some(date) = self.date {
            form.set_reservation_date(Some(date));
        }
        if let Some(time) = self.time {
            form.set_reservation_time(Some(time));
        }
        if let Some(party) = self.party {
            form.set_party_size(party);
        }
        if let Some(status) = self.status {
            form.set_status(status);
        }
    }
}
