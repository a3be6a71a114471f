//! Main entry point for the mesa CLI.
//!
//! This is the command-line interface for the Casa Caribe reservation
//! system. It provides commands for managing reservations:
//! - `list`: List reservations
//! - `add`: Create a reservation
//! - `edit` / `confirm`: Change a reservation
//! - `delete`: Delete a reservation after confirmation

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library logging to stderr based on verbosity
    if let Err(e) = mesa::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        offline: cli.offline,
        busy_timeout: cli.busy_timeout,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Add(cmd) => cmd.execute(&global),
        cli::Command::Edit(cmd) => cmd.execute(&global),
        cli::Command::Confirm(cmd) => cmd.execute(&global),
        cli::Command::Delete(cmd) => cmd.execute(&global),
        cli::Command::Whoami(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::ShowDataDir(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
