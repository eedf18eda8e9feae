//! Completion-service seam between the tutoring core and hosted models.
//!
//! The core never issues network calls itself; it talks to a
//! [`CompletionService`] trait object. This crate defines that seam (request
//! and reply values, error kinds, secret handling) plus a reqwest-based
//! adapter for Gemini-style `generateContent` endpoints.
//!
//! ```rust
//! use lcommon::ChatTurn;
//! use lprovider::CompletionRequest;
//!
//! let request = CompletionRequest::new("gemini-2.5-flash", "What is a for loop?")
//!     .with_system_instruction("You are an expert tutor.")
//!     .with_history(vec![ChatTurn::user("hi"), ChatTurn::model("hello")]);
//!
//! assert!(request.validate().is_ok());
//! ```

mod error;
mod gemini;
mod secret;
mod service;

pub mod prelude {
    pub use crate::{
        CompletionError, CompletionErrorKind, CompletionFuture, CompletionReply,
        CompletionRequest, CompletionService, GeminiService, SecretString, TokenUsage,
    };
}

pub use error::{CompletionError, CompletionErrorKind};
pub use gemini::{GEMINI_BASE_URL, GeminiService};
pub use secret::SecretString;
pub use service::{
    CompletionFuture, CompletionReply, CompletionRequest, CompletionService, TokenUsage,
};
