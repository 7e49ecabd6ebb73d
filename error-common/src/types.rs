use thiserror::Error;

/// Process-level error for the MediVoice assistant
#[derive(Error, Debug)]
pub enum MediVoiceError {
    /// Network communication errors (binding, upstream connectivity)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Server runtime errors
    #[error("Server error: {0}")]
    ServerError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl MediVoiceError {
    /// Stable code for this error, see [`crate::codes`]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => crate::codes::system::CONFIGURATION,
            Self::NetworkError(_) | Self::ServerError(_) | Self::InternalError(_) => {
                crate::codes::system::INTERNAL
            }
        }
    }
}

/// Result type alias for MediVoice operations
pub type Result<T> = std::result::Result<T, MediVoiceError>;

/// Log an error with the context it escaped from
pub fn log_error(context: &str, error: &MediVoiceError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "MediVoice error occurred"
    );
}
