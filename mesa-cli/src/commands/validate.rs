//! Command to validate a mesa configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use mesa::config::loader::PROJECT_CONFIG_FILE;
use mesa::config::{Config, ConfigValidator};
use std::path::PathBuf;

/// Validate a mesa configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // The committed project file may not carry credentials
        let is_shared = self
            .config_path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name == PROJECT_CONFIG_FILE);

        let contents = std::fs::read_to_string(&self.config_path)?;
        let config: Config = match serde_yaml::from_str(&contents) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        match ConfigValidator::validate(&config, is_shared) {
            Ok(()) => {
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
