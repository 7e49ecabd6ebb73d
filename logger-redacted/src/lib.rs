//! Logging for the MediVoice assistant with PII redaction
//!
//! Symptom descriptions and transcripts are health information supplied by
//! the user. They must not reach the logs verbatim: everything that echoes
//! user text goes through [`PiiRedactor`] first, and only at debug level.
//!
//! # Example
//!
//! ```rust,no_run
//! use logger_redacted::{init_tracing, redact_preview, LoggerConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! init_tracing(&LoggerConfig::default(), "medivoice_server")?;
//!
//! let symptom = "headache since monday, call me on 555-123-4567";
//! tracing::debug!(symptom = %redact_preview(symptom, 40), "Symptom received");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod redactor;
pub mod subscriber;

pub use config::*;
pub use redactor::*;
pub use subscriber::*;
