//! Common imports for most lectern applications.

pub use crate::{
    course, gemini_service, model_turn, session, turn, tutor_service, tutor_service_with_store,
    user_turn,
};
pub use crate::{
    BoxFuture, ChatTurn, CompletionError, CompletionErrorKind, CompletionReply,
    CompletionRequest, CompletionService, ConversationStore, CourseCategory, CourseContext,
    GeminiService, InMemoryConversationStore, ParsedReply, RenderSegment, SecretString,
    SessionId, Speaker, TokenUsage, TutorError, TutorErrorKind, TutorService,
    TutorServiceBuilder, TutorSession, TutorTurnRequest, TutorTurnResult,
    compose_system_instruction, escape_html, highlight_code, parse_reply, render_reply,
};
