//! Completion request, reply, and service trait.

use lcommon::{BoxFuture, ChatTurn};

use crate::CompletionError;

pub type CompletionFuture<'a, T> = BoxFuture<'a, T>;

/// One request/reply exchange with a hosted generative model.
///
/// The protocol is stateless from the model's point of view: the system
/// instruction and the full prior history travel on every request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system_instruction: Option<String>,
    pub history: Vec<ChatTurn>,
    pub user_message: String,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: None,
            history: Vec::new(),
            user_message: user_message.into(),
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_history(mut self, history: Vec<ChatTurn>) -> Self {
        self.history = history;
        self
    }

    pub fn validate(&self) -> Result<(), CompletionError> {
        if self.model.trim().is_empty() {
            return Err(CompletionError::invalid_request("model must not be empty"));
        }

        if self.user_message.trim().is_empty() {
            return Err(CompletionError::invalid_request(
                "user_message must not be empty",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReply {
    pub model: String,
    pub text: String,
    pub usage: TokenUsage,
}

pub trait CompletionService: Send + Sync {
    fn name(&self) -> &str;

    fn complete<'a>(
        &'a self,
        request: CompletionRequest,
    ) -> CompletionFuture<'a, Result<CompletionReply, CompletionError>>;
}
