//! wam-app - Application state and orchestration for WA Manager
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! an explicit [`AppState`], a [`Message`] enum, a pure [`handler::update`] function
//! and [`UpdateAction`]s that the event loop turns into background tasks. It also
//! owns configuration loading and the text-generation client. Nothing here depends
//! on the terminal library.

pub mod actions;
pub mod add_button_dialog;
pub mod ai_dialog;
pub mod composer;
pub mod config;
pub mod connect;
pub mod genai;
pub mod handler;
pub mod image_prompt;
pub mod input_key;
pub mod message;
pub mod process;
pub mod request;
pub mod signals;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types
pub use actions::{TaskKey, TaskRegistry};
pub use genai::{ExternalServiceError, GeminiClient, GenerationService, LocalGenerationService};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use request::RequestId;
pub use state::{AppState, DashboardState, UiMode};
