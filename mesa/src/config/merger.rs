//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use mesa::config::{Config, ConfigMerger};
///
/// let low = Config { offline: Some(false), ..Default::default() };
/// let high = Config { offline: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.offline, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.offline.is_some() {
            target.offline = source.offline;
        }

        if source.auth_token.is_some() {
            target.auth_token.clone_from(&source.auth_token);
        }

        if source.seed_demo_data.is_some() {
            target.seed_demo_data = source.seed_demo_data;
        }

        if source.default_time.is_some() {
            target.default_time.clone_from(&source.default_time);
        }

        if source.database_path.is_some() {
            target.database_path.clone_from(&source.database_path);
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
