//! Command to show the identity the session resolved.

use crate::error::CliError;
use crate::utils::{open_session, GlobalOptions};
use clap::Args;
use serde::Serialize;

/// Show the current user id.
#[derive(Args)]
pub struct WhoamiCommand {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Identity {
    user_id: String,
    connected: bool,
}

impl WhoamiCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (session, _config) = open_session(global)?;
        let identity = Identity {
            user_id: session.user_id().to_string(),
            connected: session.is_connected(),
        };

        if self.json {
            let json = serde_json::to_string(&identity)
                .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
            println!("{json}");
        } else {
            let mode = if identity.connected { "connected" } else { "local" };
            println!("{} ({mode})", identity.user_id);
        }
        Ok(())
    }
}
