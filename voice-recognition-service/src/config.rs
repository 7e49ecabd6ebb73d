use serde::{Deserialize, Serialize};

/// Provider-specific configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VoiceProvider {
    /// OpenAI-compatible Whisper endpoint (hosted or self-hosted)
    Whisper {
        api_url: String,
        api_key: Option<String>,
        model: String, // e.g., "whisper-1", "Systran/faster-whisper-small"
        language: Option<String>,
    },
    /// Google Cloud Speech-to-Text v1
    #[serde(rename = "google-cloud")]
    GoogleCloud {
        api_url: String,
        api_key: String,
        language_code: String, // e.g., "en-US"
    },
}

impl VoiceProvider {
    /// Short provider name for logs and health reports
    pub fn name(&self) -> &'static str {
        match self {
            VoiceProvider::Whisper { .. } => "whisper",
            VoiceProvider::GoogleCloud { .. } => "google-cloud",
        }
    }
}

impl Default for VoiceProvider {
    fn default() -> Self {
        VoiceProvider::Whisper {
            api_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            model: "whisper-1".to_string(),
            language: None,
        }
    }
}

/// Voice recognition service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub provider: VoiceProvider,
    /// Upper bound for one recognition call; `None` keeps the HTTP client default
    pub request_timeout_secs: Option<u64>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            provider: VoiceProvider::default(),
            request_timeout_secs: Some(60),
        }
    }
}

impl VoiceConfig {
    /// Fill in an API key for providers that accept one but have none set
    #[must_use]
    pub fn with_fallback_api_key(mut self, key: Option<&str>) -> Self {
        if let (VoiceProvider::Whisper { api_key, .. }, Some(key)) = (&mut self.provider, key) {
            if api_key.as_deref().map_or(true, str::is_empty) {
                *api_key = Some(key.to_string());
            }
        }
        self
    }
}
