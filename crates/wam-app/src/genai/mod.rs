//! Text generation service
//!
//! A single operation: prompt in, generated marketing text out. The
//! [`GenerationService`] trait is the seam the action layer spawns against;
//! [`GeminiClient`] is the production implementation.

pub mod client;
pub mod error;

pub use client::GeminiClient;
pub use error::ExternalServiceError;

/// Wrap the user's prompt in the fixed marketing instruction
pub fn build_prompt(prompt_text: &str) -> String {
    format!(
        "Generate a short, engaging marketing message for the following purpose: \"{}\". Keep it concise and friendly.",
        prompt_text
    )
}

/// Generates message text from a prompt.
///
/// Implementations receive the user's raw prompt and are responsible for
/// applying [`build_prompt`].
#[trait_variant::make(GenerationService: Send)]
pub trait LocalGenerationService {
    /// Issue exactly one generation request
    async fn generate_text(&self, prompt_text: &str) -> Result<String, ExternalServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_interpolates_literally() {
        assert_eq!(
            build_prompt("A 20% discount on shoes"),
            "Generate a short, engaging marketing message for the following purpose: \"A 20% discount on shoes\". Keep it concise and friendly."
        );
    }

    #[test]
    fn test_build_prompt_keeps_quotes() {
        let prompt = build_prompt("say \"hi\"");
        assert!(prompt.contains("purpose: \"say \"hi\"\"."));
    }
}
