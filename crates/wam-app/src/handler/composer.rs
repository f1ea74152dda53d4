//! Composer and composer-dialog handlers

use std::path::PathBuf;

use tracing::{debug, info, warn};
use wam_core::ImageAttachment;

use crate::actions::TaskKey;
use crate::add_button_dialog::{AddButtonField, AddButtonState};
use crate::ai_dialog::AiGeneratorState;
use crate::composer::{ComposerField, ComposerModal, ComposerState};
use crate::image_prompt::ImagePathState;
use crate::message::Message;
use crate::request::RequestId;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Composer without an open dialog
fn idle_composer(state: &mut AppState) -> Option<&mut ComposerState> {
    state.composer.as_mut().filter(|c| c.modal.is_none())
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    if let Some(composer) = idle_composer(state) {
        composer.focus = composer.focus.next();
    }
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    if let Some(composer) = idle_composer(state) {
        composer.focus = composer.focus.prev();
    }
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, field: ComposerField, text: String) -> UpdateResult {
    if let Some(composer) = idle_composer(state) {
        composer.set_field_value(field, text);
    }
    UpdateResult::none()
}

pub fn handle_open_ai_dialog(state: &mut AppState) -> UpdateResult {
    if let Some(composer) = idle_composer(state) {
        composer.modal = Some(ComposerModal::AiGenerator(AiGeneratorState::new()));
    }
    UpdateResult::none()
}

pub fn handle_open_add_button_dialog(state: &mut AppState) -> UpdateResult {
    if let Some(composer) = idle_composer(state) {
        composer.modal = Some(ComposerModal::AddButton(AddButtonState::new()));
    }
    UpdateResult::none()
}

pub fn handle_open_image_prompt(state: &mut AppState) -> UpdateResult {
    if let Some(composer) = idle_composer(state) {
        composer.modal = Some(ComposerModal::ImagePath(ImagePathState::new()));
    }
    UpdateResult::none()
}

pub fn handle_send_campaign(state: &mut AppState) -> UpdateResult {
    if let Some(composer) = idle_composer(state) {
        let draft = &composer.draft;
        info!(
            "Send requested for campaign {:?} ({} chars, image: {}, buttons: {}); delivery is not available",
            draft.campaign_name,
            draft.message_text().chars().count(),
            draft.image().is_some(),
            draft.buttons().len()
        );
    }
    UpdateResult::none()
}

pub fn handle_close_dialog(state: &mut AppState) -> UpdateResult {
    let Some(composer) = state.composer.as_mut() else {
        return UpdateResult::none();
    };
    let was_generating = composer.has_generation_in_flight();
    composer.modal = None;

    if was_generating {
        debug!("AI dialog closed while generating, cancelling request");
        UpdateResult::action(UpdateAction::CancelTasks(vec![TaskKey::Generation]))
    } else {
        UpdateResult::none()
    }
}

// ─────────────────────────────────────────────────────────
// Image Upload
// ─────────────────────────────────────────────────────────

pub fn handle_upload_image(state: &mut AppState, path: PathBuf) -> UpdateResult {
    if state.composer.is_none() {
        return UpdateResult::none();
    }
    let request_id = state.next_request_id();
    if let Some(composer) = state.composer.as_mut() {
        composer.start_image_upload(request_id);
    }
    debug!("Reading image {:?} as request {}", path, request_id);
    UpdateResult::action(UpdateAction::ReadImage { request_id, path })
}

pub fn handle_image_loaded(
    state: &mut AppState,
    request_id: RequestId,
    image: ImageAttachment,
) -> UpdateResult {
    if let Some(composer) = state.composer.as_mut() {
        if composer.finish_image_upload(request_id) {
            info!("Attached image {} ({})", image.file_name(), image.size_label());
            composer.draft.set_image(image);
            return UpdateResult::none();
        }
    }
    debug!("Dropping stale image result {}", request_id);
    UpdateResult::none()
}

pub fn handle_image_load_failed(
    state: &mut AppState,
    request_id: RequestId,
    error: &str,
) -> UpdateResult {
    if let Some(composer) = state.composer.as_mut() {
        if composer.finish_image_upload(request_id) {
            debug!("Image read {} failed: {}", request_id, error);
        }
    }
    UpdateResult::none()
}

pub fn handle_image_path_input(state: &mut AppState, text: String) -> UpdateResult {
    if let Some(prompt) = state.composer.as_mut().and_then(|c| c.image_prompt_mut()) {
        prompt.path = text;
    }
    UpdateResult::none()
}

pub fn handle_submit_image_path(state: &mut AppState) -> UpdateResult {
    let Some(composer) = state.composer.as_mut() else {
        return UpdateResult::none();
    };
    let Some(prompt) = composer.image_prompt() else {
        return UpdateResult::none();
    };
    let path = prompt.submitted_path();
    composer.modal = None;

    match path {
        Some(path) => UpdateResult::message(Message::UploadImage { path }),
        None => UpdateResult::none(),
    }
}

// ─────────────────────────────────────────────────────────
// AI Generation Dialog
// ─────────────────────────────────────────────────────────

pub fn handle_ai_prompt_input(state: &mut AppState, text: String) -> UpdateResult {
    if let Some(dialog) = state.composer.as_mut().and_then(|c| c.ai_dialog_mut()) {
        dialog.set_prompt(text);
    }
    UpdateResult::none()
}

pub fn handle_generate_requested(state: &mut AppState) -> UpdateResult {
    {
        let Some(dialog) = state.composer.as_mut().and_then(|c| c.ai_dialog_mut()) else {
            return UpdateResult::none();
        };
        if dialog.is_loading() || dialog.validate().is_err() {
            return UpdateResult::none();
        }
    }

    let request_id = state.next_request_id();
    let Some(dialog) = state.composer.as_mut().and_then(|c| c.ai_dialog_mut()) else {
        return UpdateResult::none();
    };
    let prompt = dialog.begin(request_id);
    debug!("Starting generation request {}", request_id);
    UpdateResult::action(UpdateAction::GenerateMessage { request_id, prompt })
}

pub fn handle_generation_completed(
    state: &mut AppState,
    request_id: RequestId,
    text: String,
) -> UpdateResult {
    let Some(composer) = state.composer.as_mut() else {
        debug!("Dropping generation result {}: composer unmounted", request_id);
        return UpdateResult::none();
    };
    if !composer.ai_dialog().is_some_and(|d| d.is_awaiting(request_id)) {
        debug!("Dropping stale generation result {}", request_id);
        return UpdateResult::none();
    }

    composer.draft.set_message_text(text);
    composer.modal = None;
    UpdateResult::none()
}

pub fn handle_generation_failed(
    state: &mut AppState,
    request_id: RequestId,
    error: &str,
) -> UpdateResult {
    match state.composer.as_mut().and_then(|c| c.ai_dialog_mut()) {
        Some(dialog) if dialog.is_awaiting(request_id) => {
            warn!("Generation request {} failed: {}", request_id, error);
            dialog.fail();
        }
        _ => debug!("Dropping stale generation failure {}", request_id),
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Add Button Dialog
// ─────────────────────────────────────────────────────────

pub fn handle_add_button_input(
    state: &mut AppState,
    field: AddButtonField,
    text: String,
) -> UpdateResult {
    if let Some(dialog) = state.composer.as_mut().and_then(|c| c.add_button_dialog_mut()) {
        dialog.set_value(field, text);
    }
    UpdateResult::none()
}

pub fn handle_add_button_next_field(state: &mut AppState) -> UpdateResult {
    if let Some(dialog) = state.composer.as_mut().and_then(|c| c.add_button_dialog_mut()) {
        dialog.field = dialog.field.toggle();
    }
    UpdateResult::none()
}

pub fn handle_save_button(state: &mut AppState) -> UpdateResult {
    let Some(composer) = state.composer.as_mut() else {
        return UpdateResult::none();
    };
    let Some(dialog) = composer.add_button_dialog_mut() else {
        return UpdateResult::none();
    };

    match dialog.save() {
        Ok(cta) => {
            if !composer.draft.add_button(cta) {
                debug!("Button limit reached, dropping new button");
            }
            composer.modal = None;
        }
        Err(e) => debug!("Button rejected: {}", e),
    }
    UpdateResult::none()
}
