//! Tutor session, turn request, and turn result types.

use lcommon::{CourseContext, SessionId};
use lprotocol::{ParsedReply, RenderSegment};
use lprovider::TokenUsage;

/// One tutoring conversation bound to a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorSession {
    pub id: SessionId,
    pub course: CourseContext,
    pub model: String,
}

impl TutorSession {
    pub fn new(
        id: impl Into<SessionId>,
        course: CourseContext,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            course,
            model: model.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TutorTurnRequest {
    pub session: TutorSession,
    pub user_input: String,
}

impl TutorTurnRequest {
    pub fn new(session: TutorSession, user_input: impl Into<String>) -> Self {
        Self {
            session,
            user_input: user_input.into(),
        }
    }
}

/// Everything one completed turn produced: the raw model text, the parsed
/// directive, and the displayable segments, in that derivation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorTurnResult {
    pub session_id: SessionId,
    pub raw_text: String,
    pub reply: ParsedReply,
    pub segments: Vec<RenderSegment>,
    pub usage: TokenUsage,
}
