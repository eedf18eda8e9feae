//! Runtime wiring helpers for tutoring-session usage.

use std::sync::Arc;

use crate::{CompletionService, ConversationStore, GeminiService, TutorService};

pub fn tutor_service(completion: Arc<dyn CompletionService>) -> TutorService {
    TutorService::builder(completion).build()
}

pub fn tutor_service_with_store(
    completion: Arc<dyn CompletionService>,
    store: Arc<dyn ConversationStore>,
) -> TutorService {
    TutorService::builder(completion).store(store).build()
}

pub fn gemini_service(api_key: impl Into<String>) -> GeminiService {
    GeminiService::new(reqwest::Client::new(), api_key)
}
