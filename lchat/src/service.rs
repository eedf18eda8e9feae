//! Tutor service: one-turn orchestration from user input to render segments.

use std::sync::Arc;

use lcommon::ChatTurn;
use lprompt::{compose_system_instruction, extract_topic_array, syllabus_request_prompt};
use lprotocol::{ParsedReply, parse_reply, render_reply};
use lprovider::{CompletionRequest, CompletionService, TokenUsage};

use crate::{
    ConversationStore, InMemoryConversationStore, TutorError, TutorErrorKind, TutorSession,
    TutorTurnRequest, TutorTurnResult,
};

/// Shown in place of a model reply when the completion call fails.
pub const FALLBACK_APOLOGY: &str =
    "Sorry, my digital brain disconnected for a moment. Please try again.";

/// Opening message sent on the student's behalf when a class begins.
pub const CONVERSATION_OPENER: &str =
    "Hello, I'm the student. Start the class with a greeting and ask me a \
     question about the first topic. If it is a theory question, give me options.";

#[derive(Clone)]
pub struct TutorService {
    completion: Arc<dyn CompletionService>,
    store: Arc<dyn ConversationStore>,
    apology: String,
}

impl TutorService {
    pub fn builder(completion: Arc<dyn CompletionService>) -> TutorServiceBuilder {
        TutorServiceBuilder::new(completion)
    }

    /// Runs one full tutoring turn.
    ///
    /// The course's system instruction is recomposed and resent on every
    /// call; the completion protocol is stateless on the model side. On
    /// success the user turn and the model turn (directive-stripped display
    /// text, as the conversation log stores it) are appended to the store
    /// in that order.
    pub async fn run_turn(&self, request: TutorTurnRequest) -> Result<TutorTurnResult, TutorError> {
        if request.user_input.trim().is_empty() {
            return Err(TutorError::invalid_request("user_input must not be empty"));
        }

        let TutorTurnRequest {
            session,
            user_input,
        } = request;

        tracing::debug!(session = %session.id, course = %session.course.title, "running tutor turn");

        let history = self.store.load_turns(&session.id).await?;
        let instruction = compose_system_instruction(&session.course);

        let completion_request = CompletionRequest::new(session.model.clone(), user_input.clone())
            .with_system_instruction(instruction)
            .with_history(history);

        let completion = self
            .completion
            .complete(completion_request)
            .await
            .inspect_err(|error| {
                tracing::warn!(session = %session.id, %error, "completion call failed");
            })?;

        let reply = parse_reply(&completion.text);
        let segments = render_reply(&reply.display_text, session.course.category);

        self.store
            .append_turns(
                &session.id,
                vec![
                    ChatTurn::user(user_input),
                    ChatTurn::model(reply.display_text.clone()),
                ],
            )
            .await?;

        Ok(TutorTurnResult {
            session_id: session.id,
            raw_text: completion.text,
            reply,
            segments,
            usage: completion.usage,
        })
    }

    /// Opens a fresh conversation by sending [`CONVERSATION_OPENER`] on the
    /// student's behalf.
    ///
    /// The scripted opener is not part of the visible conversation; only
    /// the model's greeting is appended to the store.
    pub async fn start_conversation(
        &self,
        session: TutorSession,
    ) -> Result<TutorTurnResult, TutorError> {
        tracing::debug!(session = %session.id, course = %session.course.title, "starting tutor conversation");

        let instruction = compose_system_instruction(&session.course);
        let completion_request =
            CompletionRequest::new(session.model.clone(), CONVERSATION_OPENER)
                .with_system_instruction(instruction);

        let completion = self
            .completion
            .complete(completion_request)
            .await
            .inspect_err(|error| {
                tracing::warn!(session = %session.id, %error, "conversation opener failed");
            })?;

        let reply = parse_reply(&completion.text);
        let segments = render_reply(&reply.display_text, session.course.category);

        self.store
            .append_turns(
                &session.id,
                vec![ChatTurn::model(reply.display_text.clone())],
            )
            .await?;

        Ok(TutorTurnResult {
            session_id: session.id,
            raw_text: completion.text,
            reply,
            segments,
            usage: completion.usage,
        })
    }

    /// Asks the model to draft a topic list for a course title.
    ///
    /// The model is prompted for a strict JSON array; the first array-shaped
    /// slice of the reply is decoded. A reply with no decodable array
    /// degrades to an empty list rather than an error.
    pub async fn generate_syllabus(
        &self,
        model: impl Into<String>,
        course_title: &str,
    ) -> Result<Vec<String>, TutorError> {
        let request = CompletionRequest::new(model, syllabus_request_prompt(course_title));
        let completion = self
            .completion
            .complete(request)
            .await
            .inspect_err(|error| {
                tracing::warn!(course = course_title, %error, "syllabus generation failed");
            })?;

        Ok(extract_topic_array(&completion.text).unwrap_or_default())
    }

    /// Like [`run_turn`](Self::run_turn), but degrades completion failures
    /// to a synthetic apology turn instead of an error.
    ///
    /// The apology turn is never persisted; invalid requests and store
    /// failures still propagate.
    pub async fn run_turn_or_apology(
        &self,
        request: TutorTurnRequest,
    ) -> Result<TutorTurnResult, TutorError> {
        let session_id = request.session.id.clone();
        let category = request.session.course.category;

        match self.run_turn(request).await {
            Ok(result) => Ok(result),
            Err(error) if error.kind == TutorErrorKind::Completion => {
                tracing::warn!(session = %session_id, %error, "substituting apology reply");
                Ok(TutorTurnResult {
                    session_id,
                    raw_text: self.apology.clone(),
                    reply: ParsedReply::plain(&self.apology),
                    segments: render_reply(&self.apology, category),
                    usage: TokenUsage::default(),
                })
            }
            Err(error) => Err(error),
        }
    }
}

pub struct TutorServiceBuilder {
    completion: Arc<dyn CompletionService>,
    store: Option<Arc<dyn ConversationStore>>,
    apology: Option<String>,
}

impl TutorServiceBuilder {
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self {
            completion,
            store: None,
            apology: None,
        }
    }

    pub fn store(mut self, store: Arc<dyn ConversationStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn apology(mut self, apology: impl Into<String>) -> Self {
        self.apology = Some(apology.into());
        self
    }

    pub fn build(self) -> TutorService {
        TutorService {
            completion: self.completion,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(InMemoryConversationStore::new())),
            apology: self.apology.unwrap_or_else(|| FALLBACK_APOLOGY.to_string()),
        }
    }
}
