//! Tests for configuration and tracing setup

use app_commands::telemetry::init_tracing;
use app_commands::AppConfig;
use core_kernel::{CoreError, Currency, Money};
use rust_decimal_macros::dec;

fn environment(pairs: &[(&str, &str)]) -> config::Environment {
    let map: config::Map<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    config::Environment::with_prefix("COVERAGE").source(Some(map))
}

// ============================================================================
// AppConfig Tests
// ============================================================================

mod app_config_tests {
    use super::*;

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = AppConfig::from_environment(environment(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::from_environment(environment(&[
            ("COVERAGE_LOG_LEVEL", "debug"),
            ("COVERAGE_DEFAULT_CURRENCY", "USD"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_currency, Currency::USD);
        assert_eq!(config.claim_amount(dec!(5)).unwrap(), Money::new(dec!(5), Currency::USD));
    }

    #[test]
    fn test_unknown_currency_is_a_configuration_error() {
        let result =
            AppConfig::from_environment(environment(&[("COVERAGE_DEFAULT_CURRENCY", "XYZ")]));
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }

    #[test]
    fn test_from_env_without_coverage_variables_gives_defaults() {
        assert!(std::env::vars().all(|(key, _)| !key.starts_with("COVERAGE_")));
        assert_eq!(AppConfig::from_env().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_blank_log_level_is_rejected() {
        let result = AppConfig::from_environment(environment(&[("COVERAGE_LOG_LEVEL", "  ")]));
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }
}

// ============================================================================
// Telemetry Tests
// ============================================================================

mod telemetry_tests {
    use super::*;

    #[test]
    fn test_second_install_is_rejected() {
        let _ = init_tracing("debug");
        assert!(matches!(init_tracing("debug"), Err(CoreError::Configuration(_))));
    }
}
