//! Conversation storage contracts and a basic in-memory implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use lcommon::{BoxFuture, ChatTurn, SessionId};

use crate::TutorError;

pub type StoreFuture<'a, T> = BoxFuture<'a, T>;

/// Ordered conversation log keyed by session. Turns are appended, never
/// reordered; persistence beyond process lifetime is the caller's concern.
pub trait ConversationStore: Send + Sync {
    fn load_turns<'a>(
        &'a self,
        session_id: &'a SessionId,
    ) -> StoreFuture<'a, Result<Vec<ChatTurn>, TutorError>>;

    fn append_turns<'a>(
        &'a self,
        session_id: &'a SessionId,
        turns: Vec<ChatTurn>,
    ) -> StoreFuture<'a, Result<(), TutorError>>;
}

#[derive(Debug, Default)]
pub struct InMemoryConversationStore {
    sessions: Mutex<HashMap<String, Vec<ChatTurn>>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConversationStore for InMemoryConversationStore {
    fn load_turns<'a>(
        &'a self,
        session_id: &'a SessionId,
    ) -> StoreFuture<'a, Result<Vec<ChatTurn>, TutorError>> {
        Box::pin(async move {
            let sessions = self
                .sessions
                .lock()
                .map_err(|_| TutorError::store("conversation store lock poisoned"))?;

            Ok(sessions.get(session_id.as_str()).cloned().unwrap_or_default())
        })
    }

    fn append_turns<'a>(
        &'a self,
        session_id: &'a SessionId,
        turns: Vec<ChatTurn>,
    ) -> StoreFuture<'a, Result<(), TutorError>> {
        Box::pin(async move {
            let mut sessions = self
                .sessions
                .lock()
                .map_err(|_| TutorError::store("conversation store lock poisoned"))?;

            sessions
                .entry(session_id.as_str().to_string())
                .or_default()
                .extend(turns);

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use lcommon::Speaker;

    use super::*;

    #[tokio::test]
    async fn appended_turns_come_back_in_order() {
        let store = InMemoryConversationStore::new();
        let session = SessionId::from("session-1");

        store
            .append_turns(
                &session,
                vec![ChatTurn::user("first"), ChatTurn::model("second")],
            )
            .await
            .expect("append should succeed");

        let turns = store.load_turns(&session).await.expect("load should succeed");
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].speaker, Speaker::User);
        assert_eq!(turns[1].speaker, Speaker::Model);
    }

    #[tokio::test]
    async fn unknown_sessions_load_empty() {
        let store = InMemoryConversationStore::new();
        let turns = store
            .load_turns(&SessionId::from("missing"))
            .await
            .expect("load should succeed");
        assert!(turns.is_empty());
    }
}
