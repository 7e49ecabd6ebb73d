/// Google Cloud Speech-to-Text provider (v1 REST API)
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::audio::RecordedAudio;
use crate::config::VoiceProvider;
use crate::error::{VoiceError, VoiceResult};
use crate::providers::{non_empty, RecognitionProvider};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognizeRequest<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    encoding: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_rate_hertz: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    audio_channel_count: Option<u16>,
    language_code: &'a str,
}

#[derive(Debug, Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Debug, Default, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Debug, Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<Alternative>,
}

#[derive(Debug, Deserialize)]
struct Alternative {
    #[serde(default)]
    transcript: String,
}

impl RecognizeResponse {
    /// Best alternative of every result, joined in order
    fn transcript(&self) -> Option<String> {
        let joined = self
            .results
            .iter()
            .filter_map(|r| r.alternatives.first())
            .map(|a| a.transcript.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        non_empty(&joined)
    }
}

pub struct GoogleProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    language_code: String,
}

impl GoogleProvider {
    /// # Errors
    ///
    /// Returns [`VoiceError::Config`] if `config` is not a Google Cloud provider
    /// or the API key is empty.
    pub fn new(client: reqwest::Client, config: &VoiceProvider) -> VoiceResult<Self> {
        let VoiceProvider::GoogleCloud { api_url, api_key, language_code } = config else {
            return Err(VoiceError::Config(
                "expected google-cloud provider configuration".to_string(),
            ));
        };
        if api_key.is_empty() {
            return Err(VoiceError::Config("google-cloud provider requires an api_key".to_string()));
        }
        Ok(Self {
            client,
            endpoint: format!("{}/v1/speech:recognize", api_url.trim_end_matches('/')),
            api_key: api_key.clone(),
            language_code: language_code.clone(),
        })
    }

    fn request_body<'a>(&'a self, audio: &RecordedAudio) -> RecognizeRequest<'a> {
        // Hints only when the WAV header was parsed; other containers are auto-detected
        let (encoding, sample_rate_hertz, audio_channel_count) = match audio.wav {
            Some(info) => (Some("LINEAR16"), Some(info.sample_rate), Some(info.channels)),
            None => (None, None, None),
        };
        RecognizeRequest {
            config: RecognitionConfig {
                encoding,
                sample_rate_hertz,
                audio_channel_count,
                language_code: &self.language_code,
            },
            audio: RecognitionAudio {
                content: general_purpose::STANDARD.encode(&audio.bytes),
            },
        }
    }
}

#[async_trait]
impl RecognitionProvider for GoogleProvider {
    async fn recognize(&self, audio: &RecordedAudio) -> VoiceResult<Option<String>> {
        debug!(audio_size = audio.bytes.len(), "Sending google speech recognize request");

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&self.request_body(audio))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(VoiceError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: RecognizeResponse = serde_json::from_str(&body)?;
        Ok(parsed.transcript())
    }

    fn name(&self) -> &'static str {
        "google-cloud"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::WavInfo;

    fn provider() -> GoogleProvider {
        GoogleProvider::new(
            reqwest::Client::new(),
            &VoiceProvider::GoogleCloud {
                api_url: "https://speech.googleapis.com/".to_string(),
                api_key: "test-key".to_string(),
                language_code: "en-US".to_string(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(provider().endpoint, "https://speech.googleapis.com/v1/speech:recognize");
    }

    #[test]
    fn test_request_body_for_wav() {
        let p = provider();
        let audio = RecordedAudio {
            bytes: vec![1, 2, 3],
            wav: Some(WavInfo {
                sample_rate: 16000,
                channels: 1,
                frames: 3,
            }),
        };
        let json = serde_json::to_value(p.request_body(&audio)).unwrap();
        assert_eq!(json["config"]["encoding"], "LINEAR16");
        assert_eq!(json["config"]["sampleRateHertz"], 16000);
        assert_eq!(json["config"]["languageCode"], "en-US");
        assert_eq!(json["audio"]["content"], "AQID");
    }

    #[test]
    fn test_request_body_without_header_omits_hints() {
        let p = provider();
        let audio = RecordedAudio {
            bytes: vec![0xff],
            wav: None,
        };
        let json = serde_json::to_value(p.request_body(&audio)).unwrap();
        assert!(json["config"].get("encoding").is_none());
        assert!(json["config"].get("sampleRateHertz").is_none());
    }

    #[test]
    fn test_transcript_joins_best_alternatives() {
        let parsed: RecognizeResponse = serde_json::from_str(
            r#"{"results":[
                {"alternatives":[
                    {"transcript":"i have a fever","confidence":0.92},
                    {"transcript":"i have a fiver"}
                ]},
                {"alternatives":[{"transcript":" and chills"}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(parsed.transcript().as_deref(), Some("i have a fever and chills"));
    }

    #[test]
    fn test_empty_response_means_nothing_recognized() {
        let parsed: RecognizeResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.transcript().is_none());
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let config = VoiceProvider::GoogleCloud {
            api_url: "https://speech.googleapis.com".to_string(),
            api_key: String::new(),
            language_code: "en-US".to_string(),
        };
        assert!(matches!(
            GoogleProvider::new(reqwest::Client::new(), &config),
            Err(VoiceError::Config(_))
        ));
    }
}
