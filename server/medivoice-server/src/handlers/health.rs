use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Configured hosted services
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProviderInfo {
    #[schema(example = "whisper")]
    pub transcription: String,
    #[schema(example = "gpt-3.5-turbo")]
    pub advice_model: String,
    #[schema(example = "google-translate")]
    pub synthesis: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Current timestamp in RFC3339 format
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub timestamp: String,
    pub providers: ProviderInfo,
}

/// Health check handler
///
/// Reports process liveness and the configured providers; upstream
/// services are not contacted.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        providers: ProviderInfo {
            transcription: state.transcriber.provider_name().to_string(),
            advice_model: state.consultation.advice_model().to_string(),
            synthesis: state.consultation.speech_engine().to_string(),
        },
    })
}
