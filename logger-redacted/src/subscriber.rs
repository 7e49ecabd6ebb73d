use thiserror::Error;
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggerConfig;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Directives used when `RUST_LOG` is not set
pub fn default_directives(config: &LoggerConfig, app_target: &str) -> String {
    format!(
        "{app_target}={level},voice_recognition_service={level},advice_service={level},\
         speech_synthesis_service={level},tower_http=info,hyper=info,reqwest=info",
        level = config.level
    )
}

/// Install the global tracing subscriber.
///
/// Human-readable output for development, one JSON object per line when
/// `config.json` is set. `RUST_LOG` overrides the configured directives.
///
/// # Errors
///
/// Returns [`LoggerError::Init`] if a global subscriber is already installed.
pub fn init_tracing(config: &LoggerConfig, app_target: &str) -> Result<(), LoggerError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config, app_target)));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_timer(ChronoUtc::rfc_3339()),
            )
            .try_init()
    };

    result.map_err(|e| LoggerError::Init(e.to_string()))
}
