//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `composer`: Composer and dialog handlers

pub(crate) mod composer;
pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use crate::actions::TaskKey;
use crate::message::Message;
use crate::request::RequestId;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Send [`Message::PairingCodeReady`] after `delay_ms`
    StartPairingTimer { delay_ms: u64 },

    /// Read and encode an image file, replacing any read in progress
    ReadImage { request_id: RequestId, path: PathBuf },

    /// Call the generation service, replacing any call in progress
    GenerateMessage { request_id: RequestId, prompt: String },

    /// Abort background tasks whose owner went away
    CancelTasks(Vec<TaskKey>),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
