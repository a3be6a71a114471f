//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Config, OutputFormat, DEFAULT_LOCK_WAIT_SECONDS, DEFAULT_TIME};
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from defaults, files, environment and overrides.
///
/// # Examples
///
/// ```
/// use mesa::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { offline: Some(true), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert!(config.is_offline());
/// assert_eq!(config.default_time.as_deref(), Some("19:00"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads files and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets where project file discovery starts. Defaults to the current
    /// directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets the data directory that holds the user config file.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Ignores every configuration file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores `MESA_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds a programmatic layer above every other source. Later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Built-in defaults, the lowest layer.
    #[must_use]
    pub fn defaults() -> Config {
        Config {
            offline: Some(false),
            auth_token: None,
            seed_demo_data: Some(true),
            default_time: Some(DEFAULT_TIME.to_string()),
            database_path: None,
            maximum_lock_wait_seconds: Some(DEFAULT_LOCK_WAIT_SECONDS),
            output_format: Some(OutputFormat::Table),
        }
    }

    /// Merges every layer and validates the result.
    ///
    /// Each file is validated on its own first, so a token committed to
    /// `mesa.yaml` is rejected even when a later layer replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or a value fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Self::defaults();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())?;
            for source in &sources {
                ConfigValidator::validate(&source.config, source.is_shared())?;
            }
            ConfigMerger::merge_into(&mut config, &ConfigMerger::merge(sources));
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config, false)?;
        Ok(config)
    }
}
