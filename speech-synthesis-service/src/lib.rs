//! Speech synthesis for advice playback
//!
//! Renders advice text as MP3 through a hosted text-to-speech engine and
//! encodes it as standard base64 (no line wrapping) so it can travel inside
//! an HTML page or a JSON body. The browser decodes it back into an
//! `audio/mpeg` blob.
//!
//! # Engines
//!
//! - **Google Translate** - the public translate TTS endpoint; long text is
//!   spoken in chunks of at most 100 characters and the MP3 streams are
//!   concatenated
//! - **OpenAI** - `/audio/speech` with `response_format = mp3`
//!
//! # Example
//!
//! ```rust,no_run
//! use speech_synthesis_service::{SpeechSynthesizer, SynthesisConfig, SynthesisService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let synthesizer = SynthesisService::new(SynthesisConfig::default())?;
//! let audio = synthesizer.synthesize("Rest and drink plenty of fluids.").await?;
//! println!("{} bytes of MP3", audio.byte_len);
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod config;
pub mod engines;
pub mod error;
pub mod synthesizer;

pub use audio::*;
pub use config::*;
pub use error::*;
pub use synthesizer::*;
