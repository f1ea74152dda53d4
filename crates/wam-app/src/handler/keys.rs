//! Key event handlers for different UI modes

use wam_core::{DashboardFilter, ViewSelector};

use crate::composer::{ComposerField, ComposerFocus, ComposerState};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode() {
        UiMode::Connect => handle_key_connect(key),
        UiMode::Dashboard => handle_key_dashboard(state, key),
        UiMode::Composer => handle_key_composer(state, key),
        UiMode::AiDialog => handle_key_ai_dialog(state, key),
        UiMode::AddButtonDialog => handle_key_add_button_dialog(state, key),
        UiMode::ImagePrompt => handle_key_image_prompt(state, key),
    }
}

/// Apply a text-editing key to `current`.
///
/// Returns the new field value for printable characters, Backspace and
/// Ctrl+U (clear); `None` for anything else.
fn edit_text(current: &str, key: &InputKey) -> Option<String> {
    match key {
        InputKey::Backspace => {
            let mut text = current.to_string();
            text.pop();
            Some(text)
        }
        InputKey::CharCtrl('u') => Some(String::new()),
        _ => key.printable().map(|c| {
            let mut text = current.to_string();
            text.push(c);
            text
        }),
    }
}

/// Sidebar shortcuts shared by the non-modal screens
fn handle_navigation_key(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::F(1) => Some(Message::SetView(ViewSelector::Dashboard)),
        InputKey::F(2) => Some(Message::SetView(ViewSelector::NewCampaign)),
        _ => None,
    }
}

fn handle_key_connect(key: InputKey) -> Option<Message> {
    match key {
        // Available whether or not the pairing code has appeared
        InputKey::Enter => Some(Message::ConfirmConnect),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_dashboard(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_navigation_key(&key) {
        return Some(msg);
    }

    let current = state.dashboard.map(|d| d.filter).unwrap_or_default();
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('n') => Some(Message::SetView(ViewSelector::NewCampaign)),

        InputKey::Left => Some(Message::SetFilter(current.prev())),
        InputKey::Right => Some(Message::SetFilter(current.next())),
        InputKey::Char('t') => Some(Message::SetFilter(DashboardFilter::Today)),
        InputKey::Char('w') => Some(Message::SetFilter(DashboardFilter::ThisWeek)),
        InputKey::Char('m') => Some(Message::SetFilter(DashboardFilter::ThisMonth)),
        _ => None,
    }
}

fn handle_key_composer(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_navigation_key(&key) {
        return Some(msg);
    }
    let composer = state.composer.as_ref()?;

    match key {
        InputKey::Tab | InputKey::Down => return Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::FocusPrev),
        InputKey::Enter => return activate_focused(composer),
        _ => {}
    }

    let field = composer.focus.text_field()?;
    edit_text(composer.field_value(field), &key).map(|text| Message::ComposerInput { field, text })
}

/// Enter on the focused element
fn activate_focused(composer: &ComposerState) -> Option<Message> {
    match composer.focus {
        ComposerFocus::CampaignName | ComposerFocus::SheetLink => Some(Message::FocusNext),
        ComposerFocus::Message => {
            let mut text = composer.draft.message_text().to_string();
            text.push('\n');
            Some(Message::ComposerInput {
                field: ComposerField::Message,
                text,
            })
        }
        ComposerFocus::GenerateAi => Some(Message::OpenAiDialog),
        ComposerFocus::AddImage => Some(Message::OpenImagePrompt),
        ComposerFocus::AddButton => Some(Message::OpenAddButtonDialog),
        ComposerFocus::SendCampaign => Some(Message::SendCampaign),
    }
}

fn handle_key_ai_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    let dialog = state.composer.as_ref()?.ai_dialog()?;

    match key {
        // Closing stays available while a request is in flight
        InputKey::Esc => Some(Message::CloseDialog),
        _ if dialog.is_loading() => None,
        InputKey::Enter => Some(Message::GenerateRequested),
        _ => edit_text(&dialog.prompt, &key).map(|text| Message::AiPromptInput { text }),
    }
}

fn handle_key_add_button_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    let dialog = state.composer.as_ref()?.add_button_dialog()?;

    match key {
        InputKey::Esc => Some(Message::CloseDialog),
        InputKey::Enter => Some(Message::SaveButton),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            Some(Message::AddButtonNextField)
        }
        _ => {
            let field = dialog.field;
            edit_text(dialog.value(field), &key).map(|text| Message::AddButtonInput { field, text })
        }
    }
}

fn handle_key_image_prompt(state: &AppState, key: InputKey) -> Option<Message> {
    let prompt = state.composer.as_ref()?.image_prompt()?;

    match key {
        InputKey::Esc => Some(Message::CloseDialog),
        InputKey::Enter => Some(Message::SubmitImagePath),
        _ => edit_text(&prompt.path, &key).map(|text| Message::ImagePathInput { text }),
    }
}
