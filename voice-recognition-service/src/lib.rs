//! Voice Recognition Service for symptom dictation
//!
//! Turns a recorded clip from the browser into text by submitting the whole
//! recording to a hosted speech-recognition service in a single request.
//!
//! Recognition never fails outward: the result is a [`TranscriptionOutcome`]
//! that is either the recognized utterance or a failure kind
//! ([`FailureKind::Unintelligible`] or [`FailureKind::ServiceFault`]). Older
//! clients expect the failure to be carried in the text itself, so every
//! outcome can still be rendered as the legacy sentinel string via
//! [`TranscriptionOutcome::legacy_text`].
//!
//! # Providers
//!
//! - **Whisper** - any OpenAI-compatible `/audio/transcriptions` endpoint
//!   (default: the hosted OpenAI API)
//! - **Google Cloud** - Cloud Speech-to-Text v1 `speech:recognize`
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use voice_recognition_service::{Transcriber, VoiceConfig, VoiceService};
//!
//! # async fn example(recording: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let voice_service = VoiceService::new(VoiceConfig::default())?;
//!
//! let outcome = voice_service.transcribe(&recording).await;
//! println!("Transcription: {}", outcome.legacy_text());
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod providers;
pub mod service;
pub mod transcription;

pub use audio::*;
pub use config::*;
pub use error::*;
pub use service::*;
pub use transcription::*;
