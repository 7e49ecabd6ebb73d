use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::audio::RecordedAudio;
use crate::config::VoiceConfig;
use crate::error::VoiceResult;
use crate::providers::{create_provider, RecognitionProvider};
use crate::transcription::{FailureKind, TranscriptionOutcome};

/// Converts a recorded clip into text.
///
/// Implementations never return an error: every failure is folded into
/// [`TranscriptionOutcome::Failed`].
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> TranscriptionOutcome;

    /// Name of the backing provider, for health reports
    fn provider_name(&self) -> &'static str;
}

/// Voice recognition service backed by a hosted provider
pub struct VoiceService {
    provider: Box<dyn RecognitionProvider>,
}

impl VoiceService {
    /// Create a new voice recognition service
    ///
    /// # Errors
    ///
    /// Returns an error if the configured provider cannot be constructed.
    pub fn new(config: VoiceConfig) -> VoiceResult<Self> {
        let provider = create_provider(&config)?;
        info!(provider = provider.name(), "Voice recognition service initialized");
        Ok(Self { provider })
    }

    /// Build the service around an existing provider
    pub fn with_provider(provider: Box<dyn RecognitionProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Transcriber for VoiceService {
    async fn transcribe(&self, audio: &[u8]) -> TranscriptionOutcome {
        let staged = match RecordedAudio::stage(audio).await {
            Ok(staged) => staged,
            Err(e) => {
                warn!(error = %e, "Failed to stage recording");
                return TranscriptionOutcome::Failed(FailureKind::ServiceFault);
            }
        };

        if staged.is_silent() {
            debug!("Recording holds no audio, skipping recognition");
            return TranscriptionOutcome::Failed(FailureKind::Unintelligible);
        }

        debug!(
            provider = self.provider.name(),
            audio_size = staged.bytes.len(),
            duration_ms = staged.wav.map(|info| info.duration_ms()),
            "Transcribing audio"
        );

        match self.provider.recognize(&staged).await {
            Ok(Some(text)) => {
                debug!(
                    transcript = %logger_redacted::redact_preview(&text, 40),
                    "Recording transcribed"
                );
                TranscriptionOutcome::Recognized(text)
            }
            Ok(None) => {
                info!(provider = self.provider.name(), "No speech recognized in recording");
                TranscriptionOutcome::Failed(FailureKind::Unintelligible)
            }
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "Speech recognition service failed"
                );
                TranscriptionOutcome::Failed(FailureKind::ServiceFault)
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}
