//! Add command implementation.
//!
//! This module implements the `add` command, which fills a blank reservation
//! form from the arguments and saves it. New reservations always start as
//! pending.

use crate::error::CliError;
use crate::utils::{
    open_session, parse_date_arg, parse_time_arg, submit_form, warn_if_local, GlobalOptions,
};
use chrono::{NaiveDate, NaiveTime};
use clap::Args;

/// Create a reservation.
#[derive(Args)]
pub struct AddCommand {
    /// Customer name
    #[arg(long, value_name = "NAME", default_value = "")]
    pub name: String,

    /// Customer email
    #[arg(long, value_name = "EMAIL", default_value = "")]
    pub email: String,

    /// Reservation date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// Reservation time (HH:MM); defaults to the configured default time
    #[arg(long, value_name = "TIME", value_parser = parse_time_arg)]
    pub time: Option<NaiveTime>,

    /// Number of guests (1-10)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub party: Option<i64>,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (mut session, _config) = open_session(global)?;

        let mut form = session.new_reservation();
        form.set_customer_name(self.name);
        form.set_customer_email(self.email);
        form.set_reservation_date(self.date);
        if let Some(time) = self.time {
            form.set_reservation_time(Some(time));
        }
        if let Some(party) = self.party {
            form.set_party_size(party);
        }

        let draft = submit_form(&mut form)?;
        let created = session.save(&draft)?;
        warn_if_local(&session);

        println!("{}", created.id());
        Ok(())
    }
}
