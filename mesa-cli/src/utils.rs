//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, session startup, argument parsing and
//! reporting of rejected drafts.

use crate::error::CliError;
use chrono::{NaiveDate, NaiveTime};
use log::warn;
use mesa::config::schema::parse_time;
use mesa::database::{default_data_dir, DATABASE_FILE_NAME};
use mesa::{
    Config, ConfigBuilder, Reservation, ReservationDraft, ReservationForm, ReservationId, Session,
    Status, ValidationErrors,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Work in memory only.
    pub offline: bool,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    let config = builder
        .with_config(global_overrides(global))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(config)
}

/// The configuration layer contributed by global flags.
fn global_overrides(global: &GlobalOptions) -> Config {
    Config {
        offline: global.offline.then_some(true),
        database_path: global
            .data_dir
            .as_ref()
            .map(|dir| dir.join(DATABASE_FILE_NAME)),
        maximum_lock_wait_seconds: global.busy_timeout.map(u64::from),
        ..Config::default()
    }
}

/// Load configuration and start a session.
pub fn open_session(global: &GlobalOptions) -> Result<(Session, Config), CliError> {
    let config = load_configuration(global)?;
    let session = Session::start(&config)?;
    Ok((session, config))
}

/// Resolve the data directory path.
///
/// Returns the `--data-dir` override when given, otherwise `~/.mesa`
/// (or `MESA_DATA_DIR`).
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(CliError::from),
    }
}

/// Warn that a mutation will not outlive this process.
pub fn warn_if_local(session: &Session) {
    if !session.is_connected() {
        warn!("Working offline; this change is not saved beyond this command");
    }
}

/// Submit `form`, printing each field error on rejection.
pub fn submit_form(form: &mut ReservationForm) -> Result<ReservationDraft, CliError> {
    match form.submit() {
        Ok(draft) => Ok(draft),
        Err(errors) => {
            report_validation_errors(errors);
            Err(CliError::SemanticFailure(
                "Reservation was not saved".to_string(),
            ))
        }
    }
}

/// Print one line per rejected field to stderr.
pub fn report_validation_errors(errors: &ValidationErrors) {
    for (field, message) in errors {
        eprintln!("  {field}: {message}");
    }
}

/// Ask a yes/no question on stderr and read the answer from stdin.
///
/// Only `y` or `yes` (any case) count as agreement.
pub fn confirm_prompt(question: &str) -> Result<bool, CliError> {
    eprint!("{question} [y/N] ");
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// Parse an `HH:MM` time argument.
pub fn parse_time_arg(value: &str) -> Result<NaiveTime, String> {
    parse_time("time", value).map_err(|e| e.to_string())
}

/// Parse a reservation id argument.
pub fn parse_id_arg(value: &str) -> Result<ReservationId, String> {
    value.parse().map_err(|e: mesa::Error| e.to_string())
}

/// Parse a status argument (English or Spanish label).
pub fn parse_status_arg(value: &str) -> Result<Status, String> {
    value.parse().map_err(|e: mesa::Error| e.to_string())
}

/// Format a reservation as a block of labelled lines.
pub fn describe(reservation: &Reservation) -> String {
    format!(
        "id:       {}\nname:     {}\nemail:    {}\ndate:     {}\ntime:     {}\nparty:    {}\nstatus:   {}",
        reservation.id(),
        reservation.customer_name(),
        reservation.customer_email(),
        reservation.reservation_date(),
        reservation.reservation_time().format("%H:%M"),
        reservation.party_size().value(),
        reservation.status(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesa::seed_reservations;

    #[test]
    fn test_global_overrides() {
        let global = GlobalOptions {
            data_dir: Some(PathBuf::from("/srv/mesa")),
            offline: true,
            busy_timeout: Some(9),
            ..GlobalOptions::default()
        };
        let config = global_overrides(&global);
        assert_eq!(config.offline, Some(true));
        assert_eq!(config.database_path, Some(PathBuf::from("/srv/mesa/mesa.db")));
        assert_eq!(config.maximum_lock_wait_seconds, Some(9));
    }

    #[test]
    fn test_global_overrides_empty() {
        assert_eq!(global_overrides(&GlobalOptions::default()), Config::default());
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_date_arg("2025-12-10"), Ok(NaiveDate::from_ymd_opt(2025, 12, 10).unwrap()));
        assert!(parse_date_arg("10/12/2025").is_err());
        assert_eq!(parse_time_arg("20:15"), Ok(NaiveTime::from_hms_opt(20, 15, 0).unwrap()));
        assert!(parse_time_arg("25:00").is_err());
        assert_eq!(parse_status_arg("Confirmada"), Ok(Status::Confirmed));
        assert!(parse_status_arg("seated").is_err());
        assert_eq!(parse_id_arg("12"), Ok(ReservationId::new(12)));
        assert!(parse_id_arg("-1").is_err());
    }

    #[test]
    fn test_describe() {
        let seeds = seed_reservations();
        let first = seeds.iter().find(|r| r.id() == ReservationId::new(1)).unwrap();
        let text = describe(first);
        assert!(text.starts_with("id:       1\n"));
        assert!(text.contains(first.customer_email()));
        assert!(text.ends_with(&format!("status:   {}", first.status())));
    }
}
