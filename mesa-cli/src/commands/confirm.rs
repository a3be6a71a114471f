//! Command to mark a reservation as confirmed.

use crate::error::CliError;
use crate::utils::{open_session, parse_id_arg, submit_form, warn_if_local, GlobalOptions};
use clap::Args;
use log::info;
use mesa::{ReservationId, Status};

/// Mark a reservation as confirmed.
#[derive(Args)]
pub struct ConfirmCommand {
    /// Reservation id
    #[arg(value_name = "ID", value_parser = parse_id_arg)]
    pub id: ReservationId,
}

impl ConfirmCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (mut session, _config) = open_session(global)?;
        let mut form = session.edit_reservation(self.id)?;

        if form.draft().status == Status::Confirmed {
            info!("Reservation {} is already confirmed", self.id);
        }
        form.set_status(Status::Confirmed);

        let draft = submit_form(&mut form)?;
        let saved = session.save(&draft)?;
        warn_if_local(&session);

        println!("{saved}");
        Ok(())
    }
}
