//! Tutor-layer errors and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorErrorKind {
    InvalidRequest,
    Completion,
    Store,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorError {
    pub kind: TutorErrorKind,
    pub message: String,
}

impl TutorError {
    pub fn new(kind: TutorErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(TutorErrorKind::InvalidRequest, message)
    }

    pub fn completion(message: impl Into<String>) -> Self {
        Self::new(TutorErrorKind::Completion, message)
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::new(TutorErrorKind::Store, message)
    }
}

impl Display for TutorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for TutorError {}

impl From<lprovider::CompletionError> for TutorError {
    fn from(value: lprovider::CompletionError) -> Self {
        TutorError::completion(value.to_string())
    }
}
