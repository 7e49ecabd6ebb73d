//! Page rendering and JSON shapes
//!
//! Pure substitution of consultation results; no decisions are made here.

use handlebars::{Handlebars, RenderError, TemplateError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use voice_recognition_service::{TranscriptionOutcome, TranscriptionStatus};

use crate::services::Consultation;

const CONSULTATION_PAGE: &str = "consultation";

/// Values substituted into the consultation page
///
/// Empty strings select the welcome view and hide the play button.
#[derive(Debug, Default, Serialize)]
struct PageContext<'a> {
    symptom: &'a str,
    advice: &'a str,
    audio_base64: &'a str,
}

/// Handlebars renderer for the single chat page
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    /// # Errors
    ///
    /// Fails if the bundled template does not parse.
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(
            CONSULTATION_PAGE,
            include_str!("../templates/consultation.hbs"),
        )?;
        Ok(Self { registry })
    }

    /// # Errors
    ///
    /// Fails if rendering the template fails.
    pub fn welcome(&self) -> Result<String, RenderError> {
        self.registry.render(CONSULTATION_PAGE, &PageContext::default())
    }

    /// # Errors
    ///
    /// Fails if rendering the template fails.
    pub fn consultation(&self, consultation: &Consultation) -> Result<String, RenderError> {
        let context = PageContext {
            symptom: &consultation.symptom,
            advice: consultation.advice.text(),
            audio_base64: consultation.audio.as_ref().map_or("", |audio| audio.base64.as_str()),
        };
        self.registry.render(CONSULTATION_PAGE, &context)
    }
}

/// JSON consultation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AdviceRequest {
    #[schema(example = "headache")]
    pub symptom: String,
    /// Accepted for parity with the page form; speech uses the configured language
    #[schema(example = "en")]
    pub language: Option<String>,
}

/// JSON consultation result
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdviceResponse {
    /// Normalized symptom
    pub symptom: String,
    pub advice: String,
    /// `model` or `fallback`
    #[schema(value_type = String, example = "model")]
    pub advice_source: advice_service::AdviceSource,
    /// Base64 MP3 of the advice; `null` when synthesis failed
    pub audio_base64: Option<String>,
}

impl From<Consultation> for AdviceResponse {
    fn from(consultation: Consultation) -> Self {
        Self {
            advice: consultation.advice.text().to_string(),
            advice_source: consultation.advice.source(),
            audio_base64: consultation.audio.map(|audio| audio.base64),
            symptom: consultation.symptom,
        }
    }
}

/// Legacy `/transcribe` reply: transcript or sentinel text
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TranscriptionResponse {
    #[schema(example = "I have a headache")]
    pub text: String,
}

impl From<&TranscriptionOutcome> for TranscriptionResponse {
    fn from(outcome: &TranscriptionOutcome) -> Self {
        Self {
            text: outcome.legacy_text().to_string(),
        }
    }
}

/// Transcription reply with an explicit outcome flag
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DetailedTranscriptionResponse {
    pub text: String,
    /// `recognized`, `unintelligible` or `service_error`
    #[schema(value_type = String, example = "recognized")]
    pub status: TranscriptionStatus,
}

impl From<&TranscriptionOutcome> for DetailedTranscriptionResponse {
    fn from(outcome: &TranscriptionOutcome) -> Self {
        Self {
            text: outcome.legacy_text().to_string(),
            status: outcome.status(),
        }
    }
}

/// Multipart upload carrying the recording
#[derive(Debug, ToSchema)]
pub struct AudioUpload {
    #[schema(value_type = String, format = Binary)]
    pub audio: Vec<u8>,
}
