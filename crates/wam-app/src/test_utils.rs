//! Test helpers shared across modules

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::genai::{ExternalServiceError, GenerationService};

/// Scripted [`GenerationService`] that records every prompt it receives
#[derive(Debug)]
pub struct FakeGenerationService {
    reply: Option<String>,
    delay: Option<Duration>,
    pub calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerationService {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            ..Self::replying("")
        }
    }

    /// Wait `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl GenerationService for FakeGenerationService {
    async fn generate_text(&self, prompt_text: &str) -> Result<String, ExternalServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt_text.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone().ok_or(ExternalServiceError::EmptyResponse)
    }
}
