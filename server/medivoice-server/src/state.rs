use std::sync::Arc;

use advice_service::AdviceGenerator;
use handlebars::TemplateError;
use speech_synthesis_service::SpeechSynthesizer;
use voice_recognition_service::Transcriber;

use crate::config::ServerLimits;
use crate::presentation::PageRenderer;
use crate::services::ConsultationService;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub consultation: ConsultationService,
    pub transcriber: Arc<dyn Transcriber>,
    pub pages: Arc<PageRenderer>,
    pub limits: ServerLimits,
}

impl AppState {
    /// # Errors
    ///
    /// Fails if the page template does not parse.
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        advisor: Arc<dyn AdviceGenerator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        limits: ServerLimits,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            consultation: ConsultationService::new(advisor, synthesizer),
            transcriber,
            pages: Arc::new(PageRenderer::new()?),
            limits,
        })
    }
}
