//! Tutoring turn orchestration over a completion service.
//!
//! [`TutorService`] owns one full turn: compose the course's system
//! instruction, send the user message with prior history to the completion
//! service, parse the sentinel directives out of the reply, render display
//! segments for the course category, and append both turns to the
//! conversation store.

mod error;
mod service;
mod store;
mod types;

pub mod prelude {
    pub use crate::{
        ConversationStore, InMemoryConversationStore, StoreFuture, TutorError, TutorErrorKind,
        TutorService, TutorServiceBuilder, TutorSession, TutorTurnRequest, TutorTurnResult,
    };
    pub use lcommon::{ChatTurn, CourseCategory, CourseContext, SessionId, Speaker};
    pub use lprotocol::{ParsedReply, RenderSegment};
}

pub use error::{TutorError, TutorErrorKind};
pub use service::{CONVERSATION_OPENER, FALLBACK_APOLOGY, TutorService, TutorServiceBuilder};
pub use store::{ConversationStore, InMemoryConversationStore, StoreFuture};
pub use types::{TutorSession, TutorTurnRequest, TutorTurnResult};
