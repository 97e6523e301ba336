//! Tracing setup for the match service binaries.

use crate::config::TelemetryConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    InvalidFilter {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to install tracing subscriber")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Resolve the active log filter. An explicit `RUST_LOG` wins so
/// operators can override a deployment without touching `APP_LOG_LEVEL`;
/// otherwise the configured level applies service-wide.
fn log_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::InvalidFilter {
        value: config.log_level.clone(),
        source,
    })
}

/// Install the process-wide subscriber: compact single-line records
/// without ANSI escapes, suitable for container log collection.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = log_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Install)
}
