pub mod google;
pub mod whisper;

use std::time::Duration;

use async_trait::async_trait;

use crate::audio::RecordedAudio;
use crate::config::{VoiceConfig, VoiceProvider};
use crate::error::VoiceResult;

/// A hosted speech-recognition backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecognitionProvider: Send + Sync {
    /// Submit the full recording in one request.
    ///
    /// `Ok(None)` means the service answered but recognized no speech.
    async fn recognize(&self, audio: &RecordedAudio) -> VoiceResult<Option<String>>;

    /// Provider name for logs
    fn name(&self) -> &'static str;
}

/// Create a provider instance based on configuration
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn create_provider(config: &VoiceConfig) -> VoiceResult<Box<dyn RecognitionProvider>> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;

    match &config.provider {
        VoiceProvider::Whisper { .. } => Ok(Box::new(whisper::WhisperProvider::new(
            client,
            &config.provider,
        )?)),
        VoiceProvider::GoogleCloud { .. } => Ok(Box::new(google::GoogleProvider::new(
            client,
            &config.provider,
        )?)),
    }
}

/// Trimmed transcript, or `None` when nothing was recognized
pub(crate) fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
