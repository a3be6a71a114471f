//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, CompletionsCommand, ConfirmCommand, DeleteCommand, EditCommand, ListCommand,
    ShowCommand, ShowDataDirCommand, ValidateCommand, WhoamiCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing Casa Caribe table reservations.
#[derive(Parser)]
#[command(name = "mesa")]
#[command(version, about = "Manage restaurant table reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "MESA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep all changes in memory; never open the database
    #[arg(long, global = true, env = "MESA_OFFLINE")]
    pub offline: bool,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "MESA_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List reservations
    List(ListCommand),

    /// Show a single reservation
    Show(ShowCommand),

    /// Create a reservation
    Add(AddCommand),

    /// Change fields of a reservation
    Edit(EditCommand),

    /// Mark a reservation as confirmed
    Confirm(ConfirmCommand),

    /// Delete a reservation after confirmation
    Delete(DeleteCommand),

    /// Show the current user id
    Whoami(WhoamiCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
