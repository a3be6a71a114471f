//! Build script for mesa-cli.
//!
//! Renders the `mesa.1` man page into `OUT_DIR/man` with clap_mangen.
//! Build scripts cannot depend on the crate being built, so the command
//! tree is declared here as well.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    let id = || Arg::new("id").value_name("ID").required(true).help("Reservation id");

    Command::new("mesa")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage restaurant table reservations")
        .long_about("Command-line tool for managing Casa Caribe table reservations")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("MESA_DATA_DIR"),
        )
        .arg(
            Arg::new("offline")
                .long("offline")
                .help("Keep all changes in memory; never open the database")
                .global(true)
                .action(ArgAction::SetTrue)
                .env("MESA_OFFLINE"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("MESA_BUSY_TIMEOUT"),
        )
        .subcommands([
            Command::new("list")
                .about("List reservations")
                .long_about("List reservations in insertion order as a table, JSON, CSV or TSV"),
            Command::new("show").about("Show a single reservation").arg(id()),
            Command::new("add")
                .about("Create a reservation")
                .long_about("Create a reservation; new reservations always start as pending"),
            Command::new("edit")
                .about("Change fields of a reservation")
                .long_about("Change fields of a reservation; omitted fields keep their values")
                .arg(id()),
            Command::new("confirm").about("Mark a reservation as confirmed").arg(id()),
            Command::new("delete")
                .about("Delete a reservation after confirmation")
                .long_about("Delete a reservation; prompts for confirmation unless --yes is given")
                .arg(id()),
            Command::new("whoami").about("Show the current user id"),
            Command::new("validate").about("Validate a configuration file"),
            Command::new("show-data-dir").about("Show the resolved data directory path"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("mesa.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
