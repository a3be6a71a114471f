//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into tests.
const MESA_ENV_VARS: [&str; 10] = [
    "MESA_DATA_DIR",
    "MESA_OFFLINE",
    "MESA_BUSY_TIMEOUT",
    "MESA_LOG_MODE",
    "MESA_AUTH_TOKEN",
    "MESA_SEED_DEMO_DATA",
    "MESA_DEFAULT_TIME",
    "MESA_DATABASE_PATH",
    "MESA_OUTPUT_FORMAT",
    "MESA_MAXIMUM_LOCK_WAIT_SECONDS",
];

/// Test environment with isolated data directory.
///
/// The data directory is not created up front; the first command that opens
/// the database creates it and seeds the demo reservations.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the mesa data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("mesa-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a command without `--data-dir`, run from the temp directory with
    /// every `MESA_*` variable cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("mesa").expect("Failed to find mesa binary");
        for var in MESA_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("mesa.db")
    }

    /// Write a file under the temp directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Add a valid reservation and return its id.
    ///
    /// # Panics
    /// Panics if the add command fails or doesn't print an id.
    pub fn add(&self, name: &str, party: u8) -> u64 {
        let output = self
            .command()
            .args(["add", "--name", name, "--email", "guest@example.com"])
            .args(["--date", "2025-12-10", "--party", &party.to_string()])
            .output()
            .expect("Failed to run add command");

        assert!(
            output.status.success(),
            "Add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .parse()
            .expect("Output is not a reservation id")
    }

    /// List reservations as JSON.
    pub fn list_json(&self) -> Vec<serde_json::Value> {
        let output = self
            .command()
            .args(["list", "--format", "json"])
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("List output is not JSON")
    }

    /// Ids in list order.
    pub fn ids(&self) -> Vec<u64> {
        self.list_json()
            .iter()
            .map(|r| r["id"].as_u64().expect("id is a number"))
            .collect()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
