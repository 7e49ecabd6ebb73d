//! Common error handling utilities for the MediVoice assistant
//!
//! Provides the process-level error type used during startup, configuration
//! loading and serving, together with the stable error codes the HTTP layer
//! attaches to its JSON error bodies.
//!
//! Request-scoped failures of the hosted services (speech recognition,
//! chat completion, speech synthesis) have their own error enums in the
//! respective service crates; they are converted into [`MediVoiceError`]
//! only when they escape to the process boundary.
//!
//! # Example
//!
//! ```rust
//! use error_common::{MediVoiceError, Result};
//!
//! fn parse_port(raw: &str) -> Result<u16> {
//!     raw.parse()
//!         .map_err(|_| MediVoiceError::ConfigError(format!("invalid port: {raw}")))
//! }
//!
//! assert!(parse_port("8080").is_ok());
//! assert!(parse_port("http").is_err());
//! ```

pub mod codes;
pub mod types;

pub use codes::*;
pub use types::*;
