//! "Generate with AI" dialog state
//!
//! Holds the prompt, the loading flag and an inline error. Exists only while
//! the dialog is open; closing discards everything.

use wam_core::ValidationError;

use crate::request::RequestId;

/// User-visible message for every generation failure, whatever the cause
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate content. Please try again.";

pub const PROMPT_PLACEHOLDER: &str = "e.g., A 20% discount on shoes for Diwali";

#[derive(Debug, Clone, Default)]
pub struct AiGeneratorState {
    pub prompt: String,
    loading: bool,
    error: Option<String>,
    pending: Option<RequestId>,
}

impl AiGeneratorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    /// Replace the prompt text; ignored while a request is in flight
    pub fn set_prompt(&mut self, text: impl Into<String>) {
        if !self.loading {
            self.prompt = text.into();
        }
    }

    /// Validate the prompt before a request id is allocated
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if self.prompt.is_empty() {
            let err = ValidationError::PromptRequired;
            self.error = Some(err.to_string());
            return Err(err);
        }
        Ok(())
    }

    /// Enter the loading state for `request_id`, returning the prompt to send
    pub fn begin(&mut self, request_id: RequestId) -> String {
        self.error = None;
        self.loading = true;
        self.pending = Some(request_id);
        self.prompt.clone()
    }

    /// Whether a completion for `request_id` belongs to this dialog
    pub fn is_awaiting(&self, request_id: RequestId) -> bool {
        self.loading && self.pending == Some(request_id)
    }

    /// Leave the loading state with the generic failure message
    pub fn fail(&mut self) {
        self.loading = false;
        self.pending = None;
        self.error = Some(GENERATION_FAILED_MESSAGE.to_string());
    }
}
