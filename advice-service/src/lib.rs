//! Advice generation for reported symptoms
//!
//! Sends a symptom to a hosted chat-completion model with a fixed medical
//! assistant instruction and returns a short piece of advice that always ends
//! with a reminder to consult a real doctor (the reminder is requested by the
//! prompt, not checked afterwards).
//!
//! Upstream faults never reach the caller. Transient faults (timeouts,
//! connection failures, HTTP 429 and 5xx) are retried a bounded number of
//! times; after that, or after any permanent fault, the result is
//! [`Advice::Unavailable`], whose text is the fixed [`FALLBACK_ADVICE`].
//!
//! # Example
//!
//! ```rust,no_run
//! use advice_service::{AdviceConfig, AdviceGenerator, AdviceService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = AdviceService::new(AdviceConfig::default())?;
//! let advice = service.generate_advice("headache").await;
//! println!("{}", advice.text());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod retry;

pub use client::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use prompt::*;
pub use retry::*;
