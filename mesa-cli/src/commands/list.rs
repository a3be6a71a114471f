//! List command implementation.
//!
//! This module implements the `list` command, which displays reservations
//! in insertion order in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{open_session, parse_status_arg, GlobalOptions};
use clap::Args;
use mesa::config::OutputFormat;
use mesa::{Reservation, Status};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 7] = [
    "id",
    "customer_name",
    "customer_email",
    "reservation_date",
    "reservation_time",
    "party_size",
    "status",
];

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (table, json, csv, tsv); defaults to the configured format
    #[arg(long, value_name = "FORMAT", value_parser = parse_format_arg)]
    pub format: Option<OutputFormat>,

    /// Only show reservations with this status
    #[arg(long, value_name = "STATUS", value_parser = parse_status_arg)]
    pub status: Option<Status>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration and start the session
        let (session, config) = open_session(global)?;

        // 2. Apply the status filter
        let reservations: Vec<&Reservation> = session
            .list()
            .iter()
            .filter(|r| self.status.map_or(true, |status| r.status() == status))
            .collect();

        // 3. Format and output to stdout
        let format = self
            .format
            .or(config.output_format)
            .unwrap_or(OutputFormat::Table);
        match format {
            OutputFormat::Table => format_as_table(&reservations)?,
            OutputFormat::Json => format_as_json(&reservations)?,
            OutputFormat::Csv => format_as_delimited(&reservations, b',')?,
            OutputFormat::Tsv => format_as_delimited(&reservations, b'\t')?,
        }

        Ok(())
    }
}

fn parse_format_arg(value: &str) -> Result<OutputFormat, String> {
    value.parse().map_err(|e: mesa::Error| e.to_string())
}

fn row(res: &Reservation) -> [String; 7] {
    [
        res.id().to_string(),
        res.customer_name().to_string(),
        res.customer_email().to_string(),
        res.reservation_date().to_string(),
        res.reservation_time().format("%H:%M").to_string(),
        res.party_size().value().to_string(),
        res.status().to_string(),
    ]
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[&Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for res in reservations {
        writeln!(handle, "{}", row(res).join("\t"))?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(reservations: &[&Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, reservations)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited(reservations: &[&Reservation], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for res in reservations {
        writer.write_record(row(res)).map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
