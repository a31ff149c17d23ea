//! Structured logging setup using `tracing-subscriber`.
//!
//! Filter priority: `VISUALFS_LOG`, then the config file level, then the
//! default (`warn`). Output goes to stderr so the grid on stdout stays clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::{LoggingConfig, LOG_ENV};
use crate::error::AppError;

/// Initialize the global subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    let filter = build_env_filter(config)?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(config.color)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, AppError> {
    let directive = match std::env::var(LOG_ENV) {
        Ok(value) if !value.is_empty() => value,
        _ => config.level.clone(),
    };
    EnvFilter::try_new(&directive)
        .map_err(|e| AppError::Logging(format!("invalid log filter {:?}: {}", directive, e)))
}
