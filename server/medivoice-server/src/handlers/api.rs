use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::debug;

use crate::error::{ApiError, ApiErrorResponse};
use crate::handlers::transcribe::transcribe_upload;
use crate::presentation::{
    AdviceRequest, AdviceResponse, AudioUpload, DetailedTranscriptionResponse,
};
use crate::state::AppState;

/// Get advice and spoken audio for a symptom
#[utoipa::path(
    post,
    path = "/api/v1/advice",
    tag = "consultation",
    request_body = AdviceRequest,
    responses(
        (status = 200, description = "Advice with base64 MP3 audio", body = AdviceResponse),
        (status = 400, description = "Symptom is empty", body = ApiErrorResponse)
    )
)]
pub async fn create_advice(
    State(state): State<AppState>,
    Json(request): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, ApiError> {
    if let Some(language) = request.language.as_deref() {
        debug!(language, "Language selection received");
    }

    let consultation = state
        .consultation
        .consult(&request.symptom)
        .await
        .ok_or_else(|| ApiError::bad_request("symptom must not be empty"))?;

    Ok(Json(AdviceResponse::from(consultation)))
}

/// Transcribe a recording with an explicit outcome status
#[utoipa::path(
    post,
    path = "/api/v1/transcriptions",
    tag = "consultation",
    request_body(content = AudioUpload, content_type = "multipart/form-data"),
    responses(
        (
            status = 200,
            description = "Transcript and outcome status",
            body = DetailedTranscriptionResponse
        ),
        (status = 400, description = "No `audio` part in the upload", body = ApiErrorResponse),
        (status = 413, description = "Recording exceeds the upload limit", body = ApiErrorResponse)
    )
)]
pub async fn create_transcription(
    State(state): State<AppState>,
    upload: Result<Multipart, MultipartRejection>,
) -> Result<Json<DetailedTranscriptionResponse>, ApiError> {
    let outcome = transcribe_upload(&state, upload).await?;
    Ok(Json(DetailedTranscriptionResponse::from(&outcome)))
}
