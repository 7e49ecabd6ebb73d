//! Layered application configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional YAML
//! file, then `MEDIVOICE__*` environment variables
//! (e.g. `MEDIVOICE__ADVICE__MODEL=gpt-4o-mini`). `OPENAI_API_KEY` fills in
//! any OpenAI key left unset.

use std::time::Duration;

use advice_service::AdviceConfig;
use error_common::{MediVoiceError, Result};
use logger_redacted::LoggerConfig;
use serde::{Deserialize, Serialize};
use speech_synthesis_service::SynthesisConfig;
use voice_recognition_service::VoiceConfig;

pub const ENV_PREFIX: &str = "MEDIVOICE";
pub const ENV_SEPARATOR: &str = "__";
pub const FALLBACK_KEY_VAR: &str = "OPENAI_API_KEY";

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Whole-request deadline, covering recognition, completion and synthesis
    pub request_timeout_secs: u64,
    /// Largest accepted request body (audio uploads, forms, JSON)
    pub max_upload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout_secs: 120,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ServerSettings {
    pub fn limits(&self) -> ServerLimits {
        ServerLimits {
            max_upload_bytes: self.max_upload_bytes,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

/// Per-request limits enforced by the router
#[derive(Debug, Clone, Copy)]
pub struct ServerLimits {
    pub max_upload_bytes: usize,
    pub request_timeout: Duration,
}

impl Default for ServerLimits {
    fn default() -> Self {
        ServerSettings::default().limits()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub logging: LoggerConfig,
    pub advice: AdviceConfig,
    pub transcription: VoiceConfig,
    pub synthesis: SynthesisConfig,
}

impl AppConfig {
    /// Load configuration from `path` (if it exists) and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`MediVoiceError::ConfigError`] if a source cannot be read or
    /// does not match the expected shape.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                MediVoiceError::ConfigError(format!("Failed to read configuration: {e}"))
            })?;

        let loaded: AppConfig = settings
            .try_deserialize()
            .map_err(|e| MediVoiceError::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(loaded.with_fallback_api_key(std::env::var(FALLBACK_KEY_VAR).ok().as_deref()))
    }

    /// Use `key` for every OpenAI-backed service without its own key
    #[must_use]
    pub fn with_fallback_api_key(self, key: Option<&str>) -> Self {
        let key = key.filter(|k| !k.trim().is_empty());
        Self {
            advice: self.advice.with_fallback_api_key(key),
            transcription: self.transcription.with_fallback_api_key(key),
            synthesis: self.synthesis.with_fallback_api_key(key),
            ..self
        }
    }

    /// # Errors
    ///
    /// Returns [`MediVoiceError::ConfigError`] describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(MediVoiceError::ConfigError("server.port must not be 0".to_string()));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(MediVoiceError::ConfigError(
                "server.max_upload_bytes must be greater than zero".to_string(),
            ));
        }
        if self.server.request_timeout_secs == 0 {
            return Err(MediVoiceError::ConfigError(
                "server.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.synthesis.language.trim().is_empty() {
            return Err(MediVoiceError::ConfigError(
                "synthesis.language must not be empty".to_string(),
            ));
        }
        self.advice
            .validate()
            .map_err(|e| MediVoiceError::ConfigError(format!("advice: {e}")))
    }
}
