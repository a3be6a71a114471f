//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading mesa configuration files
//! from the user data directory and the project directory tree.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Shared project configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "mesa.yaml";

/// Private project configuration file name.
pub const LOCAL_CONFIG_FILE: &str = "mesa.local.yaml";

/// User configuration file name inside the data directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

impl ConfigSource {
    /// Returns `true` for the shared `mesa.yaml`, which is meant to be
    /// committed and so must not carry secrets.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.path
            .file_name()
            .is_some_and(|name| name == PROJECT_CONFIG_FILE)
    }
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use mesa::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.mesa/config.yaml` (precedence 1)
    /// 2. Project `mesa.yaml` walking up from `working_dir` (precedence 2)
    /// 3. Project `mesa.local.yaml` (precedence 3)
    ///
    /// `data_dir` overrides where the user config is loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = if let Some(dir) = data_dir {
            dir.join(USER_CONFIG_FILE)
        } else {
            match crate::database::default_data_dir() {
                Ok(dir) => dir.join(USER_CONFIG_FILE),
                Err(_) => return Ok(None),
            }
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either `mesa.yaml` or
    /// `mesa.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            let mut found_any = false;

            for (name, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let path = current.join(name);
                if path.exists() {
                    let config = Self::load_file(&path)?;
                    configs.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                    found_any = true;
                }
            }

            if found_any || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a configuration
    /// error if the YAML is invalid or has unknown fields.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read {}: {e}", path.display()),
            ))
        })?;

        let config = serde_yaml::from_str(&contents)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
