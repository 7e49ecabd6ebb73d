/// OpenAI-compatible Whisper provider
///
/// Works against the hosted OpenAI API as well as self-hosted servers that
/// expose the same `/audio/transcriptions` endpoint.
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use crate::audio::RecordedAudio;
use crate::config::VoiceProvider;
use crate::error::{VoiceError, VoiceResult};
use crate::providers::{non_empty, RecognitionProvider};

#[derive(Debug, Deserialize)]
struct WhisperResponse {
    #[serde(default)]
    text: String,
}

pub struct WhisperProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    language: Option<String>,
}

impl WhisperProvider {
    /// # Errors
    ///
    /// Returns [`VoiceError::Config`] if `config` is not a Whisper provider.
    pub fn new(client: reqwest::Client, config: &VoiceProvider) -> VoiceResult<Self> {
        let VoiceProvider::Whisper { api_url, api_key, model, language } = config else {
            return Err(VoiceError::Config("expected whisper provider configuration".to_string()));
        };
        Ok(Self {
            client,
            endpoint: format!("{}/audio/transcriptions", api_url.trim_end_matches('/')),
            api_key: api_key.clone().filter(|k| !k.is_empty()),
            model: model.clone(),
            language: language.clone().filter(|l| !l.is_empty() && l != "auto"),
        })
    }
}

#[async_trait]
impl RecognitionProvider for WhisperProvider {
    async fn recognize(&self, audio: &RecordedAudio) -> VoiceResult<Option<String>> {
        debug!(
            endpoint = %self.endpoint,
            audio_size = audio.bytes.len(),
            "Sending whisper transcription request"
        );

        let file_part = Part::bytes(audio.bytes.clone())
            .file_name("recording.wav")
            .mime_str("audio/wav")?;

        let mut form = Form::new()
            .part("file", file_part)
            .text("model", self.model.clone())
            .text("response_format", "json");
        if let Some(language) = &self.language {
            form = form.text("language", language.clone());
        }

        let mut request = self.client.post(&self.endpoint).multipart(form);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(VoiceError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: WhisperResponse = serde_json::from_str(&body)?;
        Ok(non_empty(&parsed.text))
    }

    fn name(&self) -> &'static str {
        "whisper"
    }
}
