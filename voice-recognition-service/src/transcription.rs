use serde::{Deserialize, Serialize};

/// Legacy text returned when the recording contained no recognizable speech
pub const UNINTELLIGIBLE_TEXT: &str = "Could not understand audio";

/// Legacy text returned when the recognition service could not be used
pub const SERVICE_ERROR_TEXT: &str = "Speech service error";

/// Why a recording produced no transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The service answered but found no speech it could recognize
    Unintelligible,
    /// The service failed (network fault, error status, malformed reply)
    ServiceFault,
}

/// Result of transcribing one recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionOutcome {
    Recognized(String),
    Failed(FailureKind),
}

/// Wire status for clients that want the structured outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptionStatus {
    Recognized,
    Unintelligible,
    ServiceError,
}

impl TranscriptionOutcome {
    /// Text as older clients expect it: the transcript, or a sentinel string
    pub fn legacy_text(&self) -> &str {
        match self {
            TranscriptionOutcome::Recognized(text) => text,
            TranscriptionOutcome::Failed(FailureKind::Unintelligible) => UNINTELLIGIBLE_TEXT,
            TranscriptionOutcome::Failed(FailureKind::ServiceFault) => SERVICE_ERROR_TEXT,
        }
    }

    pub fn status(&self) -> TranscriptionStatus {
        match self {
            TranscriptionOutcome::Recognized(_) => TranscriptionStatus::Recognized,
            TranscriptionOutcome::Failed(FailureKind::Unintelligible) => {
                TranscriptionStatus::Unintelligible
            }
            TranscriptionOutcome::Failed(FailureKind::ServiceFault) => {
                TranscriptionStatus::ServiceError
            }
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, TranscriptionOutcome::Recognized(_))
    }
}
