//! Full-screen rendering tests

use super::view;
use crate::test_utils::{connected_state, TestTerminal};
use wam_app::add_button_dialog::AddButtonState;
use wam_app::ai_dialog::AiGeneratorState;
use wam_app::composer::ComposerModal;
use wam_app::state::AppState;
use wam_core::{CallToAction, DashboardFilter, ViewSelector, PREVIEW_PLACEHOLDER};

fn render_screen(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::wide();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_initial_screen_is_connect_overlay() {
    let state = AppState::new();
    let term = render_screen(&state);

    assert!(term.buffer_contains("Use WhatsApp on your computer"));
    assert!(term.buffer_contains("Continue to Dashboard (Demo)"));
    assert!(!term.buffer_contains("Messages Sent"));
    assert!(!term.buffer_contains("WA Manager"));
    assert!(!term.buffer_contains("New Campaign"));
}

#[test]
fn test_connect_overlay_hides_shell_for_any_selected_view() {
    let mut state = AppState::new();
    assert!(state.set_view(ViewSelector::NewCampaign));
    let term = render_screen(&state);

    assert!(term.buffer_contains("Use WhatsApp on your computer"));
    assert!(!term.buffer_contains("WA Manager"));
    assert!(!term.buffer_contains("New Campaign"));
    assert!(!term.buffer_contains("continue (demo)"));
}

#[test]
fn test_dashboard_after_connect() {
    let mut state = connected_state(ViewSelector::Dashboard);
    if let Some(dashboard) = state.dashboard.as_mut() {
        dashboard.filter = DashboardFilter::Today;
    }
    let term = render_screen(&state);

    assert!(!term.buffer_contains("Use WhatsApp on your computer"));
    assert!(term.buffer_contains("WA Manager"));
    assert!(term.buffer_contains("An overview of your campaign performance."));
    assert!(term.buffer_contains("1,420"));
    assert!(term.buffer_contains("Today"));
}

#[test]
fn test_composer_shows_form_and_live_preview() {
    let mut state = connected_state(ViewSelector::NewCampaign);
    let term = render_screen(&state);
    assert!(term.buffer_contains("Create New Campaign"));
    assert!(term.buffer_contains(PREVIEW_PLACEHOLDER));

    let composer = state.composer.as_mut().unwrap();
    composer.draft.set_message_text("Flash sale this weekend");
    composer
        .draft
        .add_button(CallToAction::new("Shop Now", "https://shop.example.com").unwrap());
    let term = render_screen(&state);

    assert!(!term.buffer_contains(PREVIEW_PLACEHOLDER));
    // Message field and preview bubble both show the text
    assert_eq!(term.content().matches("Flash sale this weekend").count(), 2);
    assert!(term.buffer_contains("Shop Now"));
    assert!(term.buffer_contains("Add Button (1/3)"));
}

#[test]
fn test_composer_dialogs_render_over_form() {
    let mut state = connected_state(ViewSelector::NewCampaign);

    state.composer.as_mut().unwrap().modal =
        Some(ComposerModal::AiGenerator(AiGeneratorState::new()));
    let term = render_screen(&state);
    assert!(term.buffer_contains("Describe the goal of your message"));
    assert!(term.buffer_contains("Esc cancel"));

    state.composer.as_mut().unwrap().modal = Some(ComposerModal::AddButton(AddButtonState::new()));
    let term = render_screen(&state);
    assert!(term.buffer_contains("Add a Website Button"));
}

#[test]
fn test_narrow_terminal_renders_without_sidebar() {
    let state = connected_state(ViewSelector::NewCampaign);
    let mut term = TestTerminal::with_size(64, 40);
    term.draw_with(|frame| view(frame, &state));

    assert!(!term.buffer_contains("WA Manager"));
    assert!(term.buffer_contains("Create New Campaign"));
    assert!(term.buffer_contains(PREVIEW_PLACEHOLDER));
}
