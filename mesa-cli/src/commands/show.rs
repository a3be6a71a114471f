//! Command to show a single reservation.

use crate::error::CliError;
use crate::utils::{describe, open_session, parse_id_arg, GlobalOptions};
use clap::Args;
use mesa::{Error, ReservationId};

/// Show a single reservation.
#[derive(Args)]
pub struct ShowCommand {
    /// Reservation id
    #[arg(value_name = "ID", value_parser = parse_id_arg)]
    pub id: ReservationId,

    /// Print the reservation as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (session, _config) = open_session(global)?;
        let reservation = session
            .get(self.id)
            .ok_or(Error::NotFound { id: self.id })?;

        if self.json {
            let json = serde_json::to_string_pretty(reservation)
                .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
            println!("{json}");
        } else {
            println!("{}", describe(reservation));
        }
        Ok(())
    }
}
