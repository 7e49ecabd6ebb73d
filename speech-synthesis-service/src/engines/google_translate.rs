/// Google Translate TTS engine
///
/// The endpoint only accepts short texts, so advice is split on word
/// boundaries into chunks of at most [`MAX_CHUNK_CHARS`] characters. Each
/// chunk comes back as a standalone MP3 stream; MP3 frames are
/// self-delimiting, so the streams are simply concatenated.
use async_trait::async_trait;
use reqwest::header::{HeaderValue, USER_AGENT};
use tracing::debug;

use crate::config::SynthesisProvider;
use crate::engines::SpeechEngine;
use crate::error::{SynthesisError, SynthesisResult};

pub const MAX_CHUNK_CHARS: usize = 100;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) \
AppleWebKit/537.36 (KHTML, like Gecko) \
Chrome/120.0 Safari/537.36";

pub struct GoogleTranslateEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslateEngine {
    /// # Errors
    ///
    /// Returns [`SynthesisError::Config`] if `config` is not a Google Translate provider.
    pub fn new(client: reqwest::Client, config: &SynthesisProvider) -> SynthesisResult<Self> {
        let SynthesisProvider::GoogleTranslate { api_url } = config else {
            return Err(SynthesisError::Config(
                "expected google-translate provider configuration".to_string(),
            ));
        };
        Ok(Self {
            client,
            endpoint: format!("{}/translate_tts", api_url.trim_end_matches('/')),
        })
    }
}

/// Split `text` into chunks of at most `max_chars` characters, breaking on whitespace.
///
/// A single word longer than `max_chars` is broken mid-word.
pub fn split_for_tts(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let needed = if current.is_empty() { word_len } else { current_len + 1 + word_len };

        if needed <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len <= max_chars {
            current.push_str(word);
            current_len = word_len;
        } else {
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars.max(1)) {
                chunks.push(piece.iter().collect());
            }
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[async_trait]
impl SpeechEngine for GoogleTranslateEngine {
    async fn render(&self, text: &str, language: &str) -> SynthesisResult<Vec<u8>> {
        let chunks = split_for_tts(text, MAX_CHUNK_CHARS);
        let total = chunks.len().to_string();
        let mut audio = Vec::new();

        for (idx, chunk) in chunks.iter().enumerate() {
            debug!(chunk = idx, total = chunks.len(), "Requesting translate TTS chunk");
            let idx = idx.to_string();
            let textlen = chunk.chars().count().to_string();

            let response = self
                .client
                .get(&self.endpoint)
                .header(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT))
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", language),
                    ("q", chunk.as_str()),
                    ("total", total.as_str()),
                    ("idx", idx.as_str()),
                    ("textlen", textlen.as_str()),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(SynthesisError::Status {
                    status: status.as_u16(),
                    message,
                });
            }
            audio.extend_from_slice(&response.bytes().await?);
        }

        Ok(audio)
    }

    fn name(&self) -> &'static str {
        "google-translate"
    }
}
