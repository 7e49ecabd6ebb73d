use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use error_common::codes;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Error body shared by every JSON endpoint
///
/// `error` carries the human-readable message older clients read.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    #[schema(example = "No audio file received")]
    pub error: String,
    /// Stable code from [`error_common::codes`]
    #[schema(example = "VALIDATION_1002")]
    pub error_code: String,
    /// Unique error ID for tracking
    pub error_id: String,
    #[schema(example = "missing_audio")]
    pub error_type: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No audio file received")]
    MissingAudio,

    #[error("{message}")]
    BadRequest { message: String },

    #[error("Request body exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    #[error("Failed to render page: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingAudio | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::MissingAudio => "missing_audio",
            ApiError::BadRequest { .. } => "bad_request",
            ApiError::PayloadTooLarge { .. } => "payload_too_large",
            ApiError::Render(_) => "render_error",
        }
    }

    /// Stable error code for clients that branch on failures
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::MissingAudio => codes::validation::MISSING_REQUIRED_FIELD,
            ApiError::BadRequest { .. } => codes::validation::INVALID_INPUT,
            ApiError::PayloadTooLarge { .. } => codes::validation::PAYLOAD_TOO_LARGE,
            ApiError::Render(_) => codes::system::INTERNAL,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();

        if status_code.is_server_error() {
            error!(
                error_id = %error_id,
                error_code = self.error_code(),
                status_code = %status_code.as_u16(),
                error = %self,
                "API error occurred"
            );
        } else {
            warn!(
                error_id = %error_id,
                error_code = self.error_code(),
                status_code = %status_code.as_u16(),
                error = %self,
                "Request rejected"
            );
        }

        // Internal details stay in the log
        let message = if status_code.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = ApiErrorResponse {
            error: message,
            error_code: self.error_code().to_string(),
            error_id,
            error_type: self.error_type().to_string(),
            timestamp: chrono::Utc::now(),
        };

        (status_code, Json(body)).into_response()
    }
}
