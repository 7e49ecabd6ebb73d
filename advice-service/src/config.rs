use serde::{Deserialize, Serialize};

use crate::error::{AdviceError, AdviceResult};

/// Chat-completion settings for advice generation
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdviceConfig {
    /// Base URL of an OpenAI-compatible API
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    /// Low randomness keeps answers consistent between requests
    pub temperature: f32,
    /// Caps the answer at roughly 100 words
    pub max_tokens: u32,
    /// Upper bound for one completion call; `None` keeps the HTTP client default
    pub request_timeout_secs: Option<u64>,
    /// Extra attempts after a transient fault
    pub max_retries: u32,
    /// Delay before retry `n` is `n * retry_backoff_ms`
    pub retry_backoff_ms: u64,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.3,
            max_tokens: 150,
            request_timeout_secs: Some(30),
            max_retries: 2,
            retry_backoff_ms: 500,
        }
    }
}

impl AdviceConfig {
    /// # Errors
    ///
    /// Returns [`AdviceError::Config`] for out-of-range generation settings.
    pub fn validate(&self) -> AdviceResult<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AdviceError::Config(format!(
                "temperature must be within 0.0..=2.0, got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(AdviceError::Config("max_tokens must be greater than zero".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AdviceError::Config("model must not be empty".to_string()));
        }
        Ok(())
    }

    /// Fill in the API key when none is configured
    #[must_use]
    pub fn with_fallback_api_key(mut self, key: Option<&str>) -> Self {
        if self.api_key.as_deref().map_or(true, str::is_empty) {
            self.api_key = key.map(str::to_string);
        }
        self
    }
}
