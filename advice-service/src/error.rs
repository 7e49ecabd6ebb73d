use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdviceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Completion API returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed completion response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Completion response carried no content")]
    EmptyCompletion,
}

impl AdviceError {
    /// Whether a later attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            AdviceError::Network(e) => e.is_timeout() || e.is_connect(),
            AdviceError::Status { status, .. } => *status == 429 || *status >= 500,
            AdviceError::Config(_)
            | AdviceError::Serialization(_)
            | AdviceError::EmptyCompletion => false,
        }
    }
}

pub type AdviceResult<T> = Result<T, AdviceError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> AdviceError {
        AdviceError::Status {
            status: code,
            message: String::new(),
        }
    }

    #[test]
    fn test_rate_limit_and_server_errors_are_transient() {
        assert!(status(429).is_transient());
        assert!(status(500).is_transient());
        assert!(status(503).is_transient());
    }

    #[test]
    fn test_client_errors_are_permanent() {
        assert!(!status(400).is_transient());
        assert!(!status(401).is_transient());
        assert!(!AdviceError::EmptyCompletion.is_transient());
    }
}
