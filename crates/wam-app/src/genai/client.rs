//! Gemini `generateContent` REST client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ExternalServiceError;
use super::{build_prompt, GenerationService};
use crate::config::GenerationSettings;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini REST API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    settings: GenerationSettings,
}

impl GeminiClient {
    pub fn new(settings: GenerationSettings) -> Result<Self, ExternalServiceError> {
        let client = Client::builder().build()?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Full `generateContent` URL for the configured model
    pub fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.model
        )
    }

    /// Read the API key at call time so a key exported after startup works
    fn api_key(&self) -> Result<String, ExternalServiceError> {
        match std::env::var(&self.settings.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(ExternalServiceError::MissingCredential {
                var: self.settings.api_key_env.clone(),
            }),
        }
    }
}

impl GenerationService for GeminiClient {
    async fn generate_text(&self, prompt_text: &str) -> Result<String, ExternalServiceError> {
        let api_key = self.api_key()?;
        let url = self.request_url();
        let body = GenerateContentRequest::from_text(build_prompt(prompt_text));

        debug!("Sending generateContent request to {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExternalServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.into_text().ok_or(ExternalServiceError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

impl GenerateContentRequest {
    fn from_text(text: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(text) }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
