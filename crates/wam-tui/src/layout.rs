//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

pub const SIDEBAR_WIDTH: u16 = 26;

/// Below this width the sidebar is hidden
pub const MIN_SIDEBAR_TERMINAL_WIDTH: u16 = 70;

/// Composer needs this much content width to show the preview beside the form
pub const MIN_SIDE_BY_SIDE_WIDTH: u16 = 90;

pub const PREVIEW_WIDTH: u16 = 42;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Navigation sidebar; zero-width on narrow terminals
    pub sidebar: Rect,
    pub content: Rect,
    /// One-line key hint bar
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [main, status] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    let sidebar_width = if area.width >= MIN_SIDEBAR_TERMINAL_WIDTH {
        SIDEBAR_WIDTH
    } else {
        0
    };
    let [sidebar, _, content, _] = Layout::horizontal([
        Constraint::Length(sidebar_width),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(main);

    ScreenAreas {
        sidebar,
        content,
        status,
    }
}

/// Split the composer content into `(form, preview)`.
///
/// Side by side when wide enough, stacked otherwise.
pub fn split_composer(content: Rect) -> (Rect, Rect) {
    if content.width >= MIN_SIDE_BY_SIDE_WIDTH {
        let [form, _, preview] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(PREVIEW_WIDTH),
        ])
        .areas(content);
        (form, preview)
    } else {
        let [form, preview] =
            Layout::vertical([Constraint::Min(18), Constraint::Length(12)]).areas(content);
        (form, preview)
    }
}
