use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};
use voice_recognition_service::TranscriptionOutcome;

use crate::error::{ApiError, ApiErrorResponse};
use crate::presentation::{AudioUpload, TranscriptionResponse};
use crate::state::AppState;

/// Form field carrying the recording
pub const AUDIO_FIELD: &str = "audio";

/// Pull the `audio` part out of a multipart upload.
///
/// A body that is not multipart at all counts as a missing recording.
pub async fn read_audio_field(
    upload: Result<Multipart, MultipartRejection>,
    limit: usize,
) -> Result<Vec<u8>, ApiError> {
    let mut multipart = upload.map_err(|rejection| {
        debug!(reason = %rejection, "Upload is not multipart");
        ApiError::MissingAudio
    })?;

    let upload_error = |status: StatusCode, reason: String| {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge { limit }
        } else {
            ApiError::bad_request(format!("Malformed upload: {reason}"))
        }
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e.status(), e.body_text()))?
    {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| upload_error(e.status(), e.body_text()))?;
        return Ok(bytes.to_vec());
    }

    Err(ApiError::MissingAudio)
}

/// Transcribe an uploaded recording and report the outcome
pub async fn transcribe_upload(
    state: &AppState,
    upload: Result<Multipart, MultipartRejection>,
) -> Result<TranscriptionOutcome, ApiError> {
    let audio = read_audio_field(upload, state.limits.max_upload_bytes).await?;
    let outcome = state.transcriber.transcribe(&audio).await;
    info!(
        provider = state.transcriber.provider_name(),
        upload_bytes = audio.len(),
        status = ?outcome.status(),
        "Recording transcribed"
    );
    Ok(outcome)
}

/// Transcribe a voice recording
///
/// Recognition failures still answer 200, with a sentinel text.
#[utoipa::path(
    post,
    path = "/transcribe",
    tag = "chat",
    request_body(content = AudioUpload, content_type = "multipart/form-data"),
    responses(
        (
            status = 200,
            description = "Transcript, or `Could not understand audio` / `Speech service error`",
            body = TranscriptionResponse
        ),
        (status = 400, description = "No `audio` part in the upload", body = ApiErrorResponse),
        (status = 413, description = "Recording exceeds the upload limit", body = ApiErrorResponse)
    )
)]
pub async fn transcribe(
    State(state): State<AppState>,
    upload: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscriptionResponse>, ApiError> {
    let outcome = transcribe_upload(&state, upload).await?;
    Ok(Json(TranscriptionResponse::from(&outcome)))
}
