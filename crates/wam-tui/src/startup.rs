//! Startup initialization for the TUI runner
//!
//! Builds the initial state from `.wam/config.toml` and the messages that
//! must run once the first frame is on screen.

use std::path::Path;

use tracing::info;
use wam_app::config;
use wam_app::message::Message;
use wam_app::state::AppState;

/// Initial state plus messages to process after the first render
#[derive(Debug)]
pub struct Startup {
    pub state: AppState,
    pub messages: Vec<Message>,
}

pub fn startup(base_path: &Path) -> Startup {
    let settings = config::load_settings(base_path);
    info!(
        "Loaded settings: pairing_delay_ms={}, model={}, icons={}",
        settings.connect.pairing_delay_ms, settings.generation.model, settings.ui.icons
    );

    Startup {
        state: AppState::with_settings(settings),
        // The overlay is visible from the first frame
        messages: vec![Message::ConnectOverlayShown],
    }
}
