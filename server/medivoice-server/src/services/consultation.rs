//! Symptom consultation: advice generation followed by speech synthesis
//!
//! Steps run strictly in sequence for one request. Advice never fails
//! outward (the generator folds faults into its fallback), and a synthesis
//! failure leaves the consultation without audio rather than failing it.

use std::sync::Arc;

use advice_service::{Advice, AdviceGenerator};
use speech_synthesis_service::{EncodedAudio, SpeechSynthesizer};
use tracing::{debug, info, warn};

/// Lower-case and trim a raw symptom; `None` when nothing is left
pub fn normalize_symptom(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}

/// Everything one consultation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consultation {
    pub symptom: String,
    pub advice: Advice,
    /// Spoken rendering of [`Advice::text`], absent if synthesis failed
    pub audio: Option<EncodedAudio>,
}

#[derive(Clone)]
pub struct ConsultationService {
    advisor: Arc<dyn AdviceGenerator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl ConsultationService {
    pub fn new(advisor: Arc<dyn AdviceGenerator>, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self {
            advisor,
            synthesizer,
        }
    }

    /// Run a consultation for a raw symptom.
    ///
    /// Returns `None`, without contacting any service, when the symptom is
    /// empty after normalization.
    pub async fn consult(&self, raw_symptom: &str) -> Option<Consultation> {
        let symptom = normalize_symptom(raw_symptom)?;

        debug!(
            symptom = %logger_redacted::redact_preview(&symptom, 40),
            symptom_len = symptom.chars().count(),
            "Consultation started"
        );

        let advice = self.advisor.generate_advice(&symptom).await;
        info!(advice_source = ?advice.source(), advice_len = advice.text().len(), "Advice ready");

        let audio = match self.synthesizer.synthesize(advice.text()).await {
            Ok(audio) => Some(audio),
            Err(e) => {
                warn!(
                    engine = self.synthesizer.engine_name(),
                    error = %e,
                    "Speech synthesis failed, replying without audio"
                );
                None
            }
        };

        Some(Consultation {
            symptom,
            advice,
            audio,
        })
    }

    pub fn advice_model(&self) -> &str {
        self.advisor.model_name()
    }

    pub fn speech_engine(&self) -> &'static str {
        self.synthesizer.engine_name()
    }
}
