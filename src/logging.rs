//! Logging setup
//!
//! Installs a `tracing-subscriber` formatter. `RUST_LOG` takes precedence
//! over the configured filter.

use tracing_subscriber::EnvFilter;

/// Logging setup errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Build the filter: `RUST_LOG` if set, otherwise `default_filter`
pub fn env_filter(default_filter: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(default_filter)?),
    }
}

/// Install the global subscriber, failing if one is already set
pub fn try_init(default_filter: &str) -> Result<(), LoggingError> {
    let filter = env_filter(default_filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|err| LoggingError::AlreadyInitialized(err.to_string()))?;
    tracing::debug!("Logging initialized");
    Ok(())
}

/// Install the global subscriber using the app config's filter
///
/// A second call is a no-op.
pub fn init(config: &family_core::AppConfig) {
    if let Err(err) = try_init(&config.log_filter) {
        tracing::debug!("Skipping logging setup: {}", err);
    }
}
