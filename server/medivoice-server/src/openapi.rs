use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::routes::paths;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::chat::welcome_page,
        crate::handlers::chat::submit_symptom,
        crate::handlers::transcribe::transcribe,
        crate::handlers::api::create_advice,
        crate::handlers::api::create_transcription,
        crate::handlers::health::health_check,
    ),
    components(
        schemas(
            crate::presentation::AdviceRequest,
            crate::presentation::AdviceResponse,
            crate::presentation::TranscriptionResponse,
            crate::presentation::DetailedTranscriptionResponse,
            crate::presentation::AudioUpload,
            crate::handlers::health::HealthResponse,
            crate::handlers::health::ProviderInfo,
            crate::error::ApiErrorResponse,
        )
    ),
    tags(
        (name = "chat", description = "Browser chat page and voice recorder upload"),
        (name = "consultation", description = "JSON access to advice and transcription"),
        (name = "health", description = "Liveness and configuration"),
    ),
    info(
        title = "MediVoice API",
        description = "Describe a symptom by voice or text and receive brief advice \
                       with a spoken rendering. \
                       Not a substitute for a doctor.",
        contact(
            name = "MediVoice Team",
            email = "team@medivoice.dev",
            url = "https://medivoice.dev"
        ),
        license(name = "AGPL-3.0-only"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs` backed by the generated document
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(paths::docs::SWAGGER_UI).url(paths::docs::OPENAPI_JSON, ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/transcribe", "/api/v1/advice", "/api/v1/transcriptions", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
