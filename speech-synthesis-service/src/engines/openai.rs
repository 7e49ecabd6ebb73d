/// OpenAI text-to-speech engine (`/audio/speech`)
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::config::SynthesisProvider;
use crate::engines::SpeechEngine;
use crate::error::{SynthesisError, SynthesisResult};

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'static str,
}

pub struct OpenAiSpeechEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    voice: String,
}

impl OpenAiSpeechEngine {
    /// # Errors
    ///
    /// Returns [`SynthesisError::Config`] if `config` is not an OpenAI provider.
    pub fn new(client: reqwest::Client, config: &SynthesisProvider) -> SynthesisResult<Self> {
        let SynthesisProvider::OpenAi { api_url, api_key, model, voice } = config else {
            return Err(SynthesisError::Config(
                "expected openai provider configuration".to_string(),
            ));
        };
        Ok(Self {
            client,
            endpoint: format!("{}/audio/speech", api_url.trim_end_matches('/')),
            api_key: api_key.clone().filter(|k| !k.is_empty()),
            model: model.clone(),
            voice: voice.clone(),
        })
    }
}

#[async_trait]
impl SpeechEngine for OpenAiSpeechEngine {
    // The voice decides pronunciation; `language` is not a parameter of this API.
    async fn render(&self, text: &str, _language: &str) -> SynthesisResult<Vec<u8>> {
        debug!(endpoint = %self.endpoint, voice = %self.voice, "Sending speech request");

        let body = SpeechRequest {
            model: &self.model,
            input: text,
            voice: &self.voice,
            response_format: "mp3",
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
