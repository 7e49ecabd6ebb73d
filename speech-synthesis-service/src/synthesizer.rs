use std::io::Write;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::audio::{looks_like_mp3, EncodedAudio};
use crate::config::SynthesisConfig;
use crate::engines::{create_engine, SpeechEngine};
use crate::error::{SynthesisError, SynthesisResult};

/// Renders text as base64-encoded MP3
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// # Errors
    ///
    /// Fails for blank text, engine faults, and output that is not MP3.
    async fn synthesize(&self, text: &str) -> SynthesisResult<EncodedAudio>;

    /// Name of the backing engine, for health reports
    fn engine_name(&self) -> &'static str;
}

/// Speech synthesis service backed by a hosted engine
pub struct SynthesisService {
    engine: Box<dyn SpeechEngine>,
    language: String,
}

impl SynthesisService {
    /// # Errors
    ///
    /// Returns an error if the configured engine cannot be constructed.
    pub fn new(config: SynthesisConfig) -> SynthesisResult<Self> {
        let engine = create_engine(&config)?;
        info!(
            engine = engine.name(),
            language = %config.language,
            "Speech synthesis service initialized"
        );
        Ok(Self::with_engine(engine, config.language))
    }

    /// Build the service around an existing engine
    pub fn with_engine(engine: Box<dyn SpeechEngine>, language: impl Into<String>) -> Self {
        Self {
            engine,
            language: language.into(),
        }
    }
}

/// Round-trip the clip through a uniquely named scratch file.
///
/// The file is removed when the handle drops, so concurrent requests never
/// share or leak audio files.
async fn through_scratch_file(bytes: Vec<u8>) -> SynthesisResult<Vec<u8>> {
    tokio::task::spawn_blocking(move || -> SynthesisResult<Vec<u8>> {
        let mut file = tempfile::Builder::new().prefix("medivoice-tts-").suffix(".mp3").tempfile()?;
        file.write_all(&bytes)?;
        file.flush()?;
        let read_back = std::fs::read(file.path())?;
        file.close()?;
        Ok(read_back)
    })
    .await
    .map_err(|e| SynthesisError::Io(std::io::Error::other(e)))?
}

#[async_trait]
impl SpeechSynthesizer for SynthesisService {
    async fn synthesize(&self, text: &str) -> SynthesisResult<EncodedAudio> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        debug!(engine = self.engine.name(), chars = text.chars().count(), "Synthesizing speech");
        let rendered = self.engine.render(text, &self.language).await?;

        if !looks_like_mp3(&rendered) {
            warn!(engine = self.engine.name(), bytes = rendered.len(), "Engine output is not MP3");
            return Err(SynthesisError::InvalidAudio);
        }

        let bytes = through_scratch_file(rendered).await?;
        let audio = EncodedAudio::from_bytes(&bytes);
        debug!(bytes = audio.byte_len, "Speech synthesized");
        Ok(audio)
    }

    fn engine_name(&self) -> &'static str {
        self.engine.name()
    }
}
