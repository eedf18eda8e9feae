//! Unified facade over the lectern workspace crates.
//!
//! This crate is designed to be the single dependency for most
//! applications. It re-exports the core crates and provides convenience
//! constructors and wiring helpers for common tutoring-session flows.

pub mod prelude;
pub mod runtime;
pub mod util;

pub use lchat;
pub use lcommon;
pub use lprompt;
pub use lprotocol;
pub use lprovider;

pub use lchat::{
    CONVERSATION_OPENER, ConversationStore, FALLBACK_APOLOGY, InMemoryConversationStore,
    StoreFuture, TutorError, TutorErrorKind, TutorService, TutorServiceBuilder, TutorSession,
    TutorTurnRequest, TutorTurnResult,
};
pub use lcommon::{
    BoxFuture, ChatTurn, CourseCategory, CourseContext, SessionId, Speaker,
};
pub use lprompt::{
    compose_system_instruction, extract_topic_array, persona, syllabus_request_prompt,
    syllabus_topics,
};
pub use lprotocol::{
    ParsedReply, RenderSegment, escape_html, highlight_code, parse_reply, render_reply,
};
pub use lprovider::{
    CompletionError, CompletionErrorKind, CompletionFuture, CompletionReply, CompletionRequest,
    CompletionService, GEMINI_BASE_URL, GeminiService, SecretString, TokenUsage,
};

pub use runtime::{gemini_service, tutor_service, tutor_service_with_store};
pub use util::{course, model_turn, session, turn, user_turn};
