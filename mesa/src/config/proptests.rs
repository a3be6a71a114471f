//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use proptest::prelude::*;
use std::path::PathBuf;

fn time_strategy() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{h:02}:{m:02}"))
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop::sample::select(vec![
        OutputFormat::Json,
        OutputFormat::Csv,
        OutputFormat::Tsv,
        OutputFormat::Table,
    ])
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of("[a-z0-9]{1,16}"),
        prop::option::of(any::<bool>()),
        prop::option::of(time_strategy()),
        prop::option::of("/[a-z]{1,8}/mesa\\.db"),
        prop::option::of(1u64..600),
        prop::option::of(format_strategy()),
    )
        .prop_map(
            |(offline, auth_token, seed_demo_data, default_time, path, wait, output_format)| {
                Config {
                    offline,
                    auth_token,
                    seed_demo_data,
                    default_time,
                    database_path: path.map(PathBuf::from),
                    maximum_lock_wait_seconds: wait,
                    output_format,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher layer wins; unset fields fall through
    #[test]
    fn merge_higher_layer_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.offline, high.offline.or(low.offline));
        prop_assert_eq!(merged.auth_token.clone(), high.auth_token.clone().or(low.auth_token.clone()));
        prop_assert_eq!(merged.seed_demo_data, high.seed_demo_data.or(low.seed_demo_data));
        prop_assert_eq!(merged.default_time.clone(), high.default_time.clone().or(low.default_time.clone()));
        prop_assert_eq!(merged.database_path.clone(), high.database_path.clone().or(low.database_path.clone()));
        prop_assert_eq!(merged.maximum_lock_wait_seconds, high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Merging an empty layer changes nothing
    #[test]
    fn merge_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }
}
