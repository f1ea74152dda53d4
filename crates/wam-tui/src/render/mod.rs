//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use wam_app::composer::{ComposerModal, ComposerState};
use wam_app::state::AppState;
use wam_core::ViewSelector;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; animation frames come from
/// `state.tick_count`.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let icons = IconSet::new(state.settings.ui.icons);

    // Disconnected: the overlay is the whole screen
    if let Some(overlay) = &state.connect_overlay {
        frame.render_widget(
            widgets::ConnectOverlay::new(overlay, icons, state.tick_count),
            area,
        );
        return;
    }

    let areas = layout::create(area);
    if areas.sidebar.width > 0 {
        frame.render_widget(widgets::Sidebar::new(state.view(), icons), areas.sidebar);
    }
    frame.render_widget(widgets::StatusBar::new(state.ui_mode()), areas.status);

    match state.view() {
        ViewSelector::Dashboard => {
            let filter = state.dashboard.map(|d| d.filter).unwrap_or_default();
            frame.render_widget(widgets::Dashboard::new(filter, icons), areas.content);
        }
        ViewSelector::NewCampaign => {
            if let Some(composer) = &state.composer {
                render_composer(frame, composer, areas.content, icons, state.tick_count);
            }
        }
    }
}

fn render_composer(
    frame: &mut Frame,
    composer: &ComposerState,
    content: ratatui::layout::Rect,
    icons: IconSet,
    tick: u64,
) {
    let (form, preview) = layout::split_composer(content);
    frame.render_widget(widgets::ComposerForm::new(composer, icons), form);
    frame.render_widget(
        widgets::MessagePreview::new(composer.draft.preview(), icons),
        preview,
    );

    let area = frame.area();
    match &composer.modal {
        Some(ComposerModal::AiGenerator(dialog)) => {
            frame.render_widget(widgets::AiDialog::new(dialog, icons, tick), area);
        }
        Some(ComposerModal::AddButton(dialog)) => {
            frame.render_widget(widgets::AddButtonDialog::new(dialog), area);
        }
        Some(ComposerModal::ImagePath(prompt)) => {
            frame.render_widget(widgets::ImagePrompt::new(prompt), area);
        }
        None => {}
    }
}
