use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Nothing to synthesize")]
    EmptyText,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Speech engine returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Speech engine returned data that is not MP3 audio")]
    InvalidAudio,

    #[error("Scratch file error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SynthesisResult<T> = Result<T, SynthesisError>;
