//! Small convenience constructors for common types.

use crate::{
    ChatTurn, CourseCategory, CourseContext, SessionId, TutorSession, TutorTurnRequest,
};

pub fn course(title: impl Into<String>, category: &str) -> CourseContext {
    CourseContext::new(title, CourseCategory::parse(category))
}

pub fn session(
    id: impl Into<SessionId>,
    course: CourseContext,
    model: impl Into<String>,
) -> TutorSession {
    TutorSession::new(id, course, model)
}

pub fn turn(session: TutorSession, user_input: impl Into<String>) -> TutorTurnRequest {
    TutorTurnRequest::new(session, user_input)
}

pub fn user_turn(text: impl Into<String>) -> ChatTurn {
    ChatTurn::user(text)
}

pub fn model_turn(text: impl Into<String>) -> ChatTurn {
    ChatTurn::model(text)
}

#[cfg(test)]
mod tests {
    use crate::{CourseCategory, Speaker};

    use super::{course, model_turn, session, turn};

    #[test]
    fn course_helper_parses_categories_totally() {
        assert_eq!(course("A", "math").category, CourseCategory::Math);
        assert_eq!(course("B", "unknown").category, CourseCategory::Other);
    }

    #[test]
    fn turn_helper_carries_user_input() {
        let request = turn(session("s", course("A", "letters"), "m"), "hello");
        assert_eq!(request.user_input, "hello");
    }

    #[test]
    fn model_turn_helper_sets_speaker() {
        assert_eq!(model_turn("hi").speaker, Speaker::Model);
    }
}
