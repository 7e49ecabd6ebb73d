use serde::{Deserialize, Serialize};

/// Text-to-speech engine configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SynthesisProvider {
    /// Public Google Translate TTS endpoint, no credentials needed
    GoogleTranslate {
        api_url: String,
    },
    /// OpenAI `/audio/speech`
    #[serde(rename = "openai")]
    OpenAi {
        api_url: String,
        api_key: Option<String>,
        model: String, // e.g., "tts-1"
        voice: String, // e.g., "alloy"
    },
}

impl SynthesisProvider {
    pub fn name(&self) -> &'static str {
        match self {
            SynthesisProvider::GoogleTranslate { .. } => "google-translate",
            SynthesisProvider::OpenAi { .. } => "openai",
        }
    }
}

impl Default for SynthesisProvider {
    fn default() -> Self {
        SynthesisProvider::GoogleTranslate {
            api_url: "https://translate.google.com".to_string(),
        }
    }
}

/// Speech synthesis configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SynthesisConfig {
    pub provider: SynthesisProvider,
    /// Spoken language; independent of any language chosen in the page
    pub language: String,
    /// Upper bound for one engine call; `None` keeps the HTTP client default
    pub request_timeout_secs: Option<u64>,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            provider: SynthesisProvider::default(),
            language: "en".to_string(),
            request_timeout_secs: Some(30),
        }
    }
}

impl SynthesisConfig {
    /// Fill in the OpenAI key when none is configured
    #[must_use]
    pub fn with_fallback_api_key(mut self, key: Option<&str>) -> Self {
        if let (SynthesisProvider::OpenAi { api_key, .. }, Some(key)) = (&mut self.provider, key) {
            if api_key.as_deref().map_or(true, str::is_empty) {
                *api_key = Some(key.to_string());
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english_google_translate() {
        let config = SynthesisConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.provider.name(), "google-translate");
    }

    #[test]
    fn test_openai_tag() {
        let provider: SynthesisProvider = serde_json::from_str(
            r#"{
                "type": "openai",
                "api_url": "https://api.openai.com/v1",
                "api_key": null,
                "model": "tts-1",
                "voice": "alloy"
            }"#,
        )
        .unwrap();
        assert_eq!(provider.name(), "openai");

        let config = SynthesisConfig {
            provider,
            ..Default::default()
        }
        .with_fallback_api_key(Some("sk-env"));
        assert!(matches!(
            config.provider,
            SynthesisProvider::OpenAi { api_key: Some(ref k), .. } if k == "sk-env"
        ));
    }
}
