//! Application configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::{CoreError, Currency, Money, MoneyError};

/// Application configuration
///
/// Read from `COVERAGE_*` environment variables, with a `.env` file honoured
/// when present. Unset keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Currency assigned to claim amounts entered without one
    pub default_currency: Currency,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            default_currency: Currency::SGD,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();
        Self::from_environment(config::Environment::with_prefix("COVERAGE"))
    }

    /// Loads configuration from an explicit environment source
    pub fn from_environment(environment: config::Environment) -> Result<Self, CoreError> {
        let config = config::Config::builder()
            .add_source(environment)
            .build()
            .and_then(|settings| settings.try_deserialize::<AppConfig>())
            .map_err(|e| CoreError::configuration(e.to_string()))?;

        if config.log_level.trim().is_empty() {
            return Err(CoreError::validation("log_level must not be blank"));
        }
        Ok(config)
    }

    /// Wraps a bare amount in the configured default currency
    ///
    /// The amount is not rounded; finer than four decimal places is an error.
    pub fn claim_amount(&self, value: Decimal) -> Result<Money, MoneyError> {
        Money::try_new(value, self.default_currency)
    }
}
