pub mod google_translate;
pub mod openai;

use std::time::Duration;

use async_trait::async_trait;

use crate::config::{SynthesisConfig, SynthesisProvider};
use crate::error::SynthesisResult;

/// A hosted text-to-speech engine producing MP3
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    async fn render(&self, text: &str, language: &str) -> SynthesisResult<Vec<u8>>;

    fn name(&self) -> &'static str;
}

/// Create an engine instance based on configuration
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn create_engine(config: &SynthesisConfig) -> SynthesisResult<Box<dyn SpeechEngine>> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;

    match &config.provider {
        SynthesisProvider::GoogleTranslate { .. } => Ok(Box::new(
            google_translate::GoogleTranslateEngine::new(client, &config.provider)?,
        )),
        SynthesisProvider::OpenAi { .. } => Ok(Box::new(openai::OpenAiSpeechEngine::new(
            client,
            &config.provider,
        )?)),
    }
}
