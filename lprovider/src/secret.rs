//! In-memory secret handling for API credentials.

/// Holder for the single Gemini API key a [`GeminiService`] carries.
///
/// There is one long-lived credential per service instance, sent as a
/// request header; no per-user or session-scoped secrets exist here.
/// The value is redacted from `Debug` output and zeroed on drop.
///
/// [`GeminiService`]: crate::GeminiService
#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}
