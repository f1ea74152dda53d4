//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info};
use wam_core::{AppPhase, ViewSelector};

use crate::actions::TaskKey;
use crate::message::Message;
use crate::state::AppState;

use super::{composer, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Connect Overlay
        // ─────────────────────────────────────────────────────────
        Message::ConnectOverlayShown => {
            let Some(overlay) = state.connect_overlay.as_mut() else {
                return UpdateResult::none();
            };
            if overlay.arm_timer() {
                UpdateResult::action(UpdateAction::StartPairingTimer {
                    delay_ms: state.settings.connect.pairing_delay_ms,
                })
            } else {
                UpdateResult::none()
            }
        }

        Message::PairingCodeReady => {
            match state.connect_overlay.as_mut() {
                Some(overlay) => {
                    if overlay.mark_ready() {
                        debug!("Pairing code ready");
                    }
                }
                None => debug!("Pairing timer fired after overlay was dismissed, ignoring"),
            }
            UpdateResult::none()
        }

        Message::ConfirmConnect => {
            if state.connect() {
                info!("Connected, showing {}", state.view().label());
                UpdateResult::action(UpdateAction::CancelTasks(vec![TaskKey::PairingTimer]))
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SetView(view) => {
            let leaving_composer = state.is_connected()
                && state.view() == ViewSelector::NewCampaign
                && view != ViewSelector::NewCampaign;

            if !state.set_view(view) {
                return UpdateResult::none();
            }
            debug!("View changed to {}", view.label());

            if leaving_composer {
                UpdateResult::action(UpdateAction::CancelTasks(vec![
                    TaskKey::ImageRead,
                    TaskKey::Generation,
                ]))
            } else {
                UpdateResult::none()
            }
        }

        Message::SetFilter(filter) => {
            if let Some(dashboard) = state.dashboard.as_mut() {
                dashboard.filter = filter;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Composer
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => composer::handle_focus_next(state),
        Message::FocusPrev => composer::handle_focus_prev(state),
        Message::ComposerInput { field, text } => composer::handle_input(state, field, text),
        Message::OpenAiDialog => composer::handle_open_ai_dialog(state),
        Message::OpenAddButtonDialog => composer::handle_open_add_button_dialog(state),
        Message::OpenImagePrompt => composer::handle_open_image_prompt(state),
        Message::SendCampaign => composer::handle_send_campaign(state),
        Message::CloseDialog => composer::handle_close_dialog(state),

        // ─────────────────────────────────────────────────────────
        // Image Upload
        // ─────────────────────────────────────────────────────────
        Message::UploadImage { path } => composer::handle_upload_image(state, path),
        Message::ImageLoaded { request_id, image } => {
            composer::handle_image_loaded(state, request_id, image)
        }
        Message::ImageLoadFailed { request_id, error } => {
            composer::handle_image_load_failed(state, request_id, &error)
        }
        Message::ImagePathInput { text } => composer::handle_image_path_input(state, text),
        Message::SubmitImagePath => composer::handle_submit_image_path(state),

        // ─────────────────────────────────────────────────────────
        // AI Generation Dialog
        // ─────────────────────────────────────────────────────────
        Message::AiPromptInput { text } => composer::handle_ai_prompt_input(state, text),
        Message::GenerateRequested => composer::handle_generate_requested(state),
        Message::GenerationCompleted { request_id, text } => {
            composer::handle_generation_completed(state, request_id, text)
        }
        Message::GenerationFailed { request_id, error } => {
            composer::handle_generation_failed(state, request_id, &error)
        }

        // ─────────────────────────────────────────────────────────
        // Add Button Dialog
        // ─────────────────────────────────────────────────────────
        Message::AddButtonInput { field, text } => {
            composer::handle_add_button_input(state, field, text)
        }
        Message::AddButtonNextField => composer::handle_add_button_next_field(state),
        Message::SaveButton => composer::handle_save_button(state),
    }
}
