//! Delete command implementation.
//!
//! Deletion goes through the session's confirmation gate: the target is
//! marked first, then confirmed or cancelled depending on the answer.

use crate::error::CliError;
use crate::utils::{confirm_prompt, open_session, parse_id_arg, warn_if_local, GlobalOptions};
use clap::Args;
use mesa::{Error, ReservationId};

/// Delete a reservation after confirmation.
#[derive(Args)]
pub struct DeleteCommand {
    /// Reservation id
    #[arg(value_name = "ID", value_parser = parse_id_arg)]
    pub id: ReservationId,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (mut session, _config) = open_session(global)?;
        let target = session
            .get(self.id)
            .cloned()
            .ok_or(Error::NotFound { id: self.id })?;

        session.request_delete(self.id);

        let confirmed = self.yes || confirm_prompt(&format!("Delete {target}?"))?;
        if !confirmed {
            session.cancel_delete();
            if !global.quiet {
                eprintln!("Kept reservation {}", self.id);
            }
            return Ok(());
        }

        match session.confirm_delete() {
            Some(removed) => {
                warn_if_local(&session);
                if !global.quiet {
                    eprintln!("Deleted {removed}");
                }
                Ok(())
            }
            None => Err(Error::NotFound { id: self.id }.into()),
        }
    }
}
