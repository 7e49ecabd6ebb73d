use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::client::{CompletionClient, CompletionRequest, OpenAiClient};
use crate::config::AdviceConfig;
use crate::error::AdviceResult;
use crate::prompt::{user_prompt, FALLBACK_ADVICE, SYSTEM_PROMPT};
use crate::retry::RetryPolicy;

/// Where the advice text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceSource {
    Model,
    Fallback,
}

/// Outcome of one advice request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advice {
    Generated(String),
    /// The model could not be reached or gave no usable answer
    Unavailable { attempts: u32 },
}

impl Advice {
    /// Text to show and speak; the fixed fallback when unavailable
    pub fn text(&self) -> &str {
        match self {
            Advice::Generated(text) => text,
            Advice::Unavailable { .. } => FALLBACK_ADVICE,
        }
    }

    pub fn source(&self) -> AdviceSource {
        match self {
            Advice::Generated(_) => AdviceSource::Model,
            Advice::Unavailable { .. } => AdviceSource::Fallback,
        }
    }
}

/// Produces advice for a normalized, non-empty symptom.
///
/// Never fails outward; upstream faults become [`Advice::Unavailable`].
#[async_trait]
pub trait AdviceGenerator: Send + Sync {
    async fn generate_advice(&self, symptom: &str) -> Advice;

    /// Model name, for health reports
    fn model_name(&self) -> &str;
}

/// Advice generator backed by a chat-completion client
pub struct AdviceService {
    client: Box<dyn CompletionClient>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    retry: RetryPolicy,
}

impl AdviceService {
    /// # Errors
    ///
    /// Returns an error for invalid settings or if the HTTP client cannot be built.
    pub fn new(config: AdviceConfig) -> AdviceResult<Self> {
        config.validate()?;
        let client = OpenAiClient::new(&config)?;
        info!(
            model = %config.model,
            max_retries = config.max_retries,
            "Advice service initialized"
        );
        Ok(Self::with_client(Box::new(client), &config))
    }

    /// Build the service around an existing completion client
    pub fn with_client(client: Box<dyn CompletionClient>, config: &AdviceConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            retry: RetryPolicy::new(
                config.max_retries,
                Duration::from_millis(config.retry_backoff_ms),
            ),
        }
    }

    fn request_for(&self, symptom: &str) -> CompletionRequest {
        CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            user: user_prompt(symptom),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl AdviceGenerator for AdviceService {
    async fn generate_advice(&self, symptom: &str) -> Advice {
        let request = self.request_for(symptom);
        let client = self.client.as_ref();
        let request_ref = &request;

        debug!(symptom = %logger_redacted::redact_preview(symptom, 40), "Requesting advice");

        match self
            .retry
            .run(move || client.complete(request_ref), crate::error::AdviceError::is_transient)
            .await
        {
            Ok(text) => Advice::Generated(text.trim().to_string()),
            Err(exhausted) => {
                error!(
                    attempts = exhausted.attempts,
                    error = %exhausted.last_error,
                    "Chat completion failed, returning fallback advice"
                );
                Advice::Unavailable {
                    attempts: exhausted.attempts,
                }
            }
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
