//! Tracing setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::CoreError;

/// Installs the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `log_level`. Fails if `log_level` is not
/// a valid filter or a global subscriber is already installed.
pub fn init_tracing(log_level: &str) -> Result<(), CoreError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|e| CoreError::configuration(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| CoreError::configuration(e.to_string()))
}
