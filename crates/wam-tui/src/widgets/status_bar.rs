//! Bottom key-hint bar

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use wam_app::state::UiMode;

use crate::theme::styles;

/// Key hints for a UI mode as `(key, action)` pairs
pub fn hints_for(mode: UiMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        UiMode::Connect => &[("Enter", "continue (demo)"), ("q", "quit")],
        UiMode::Dashboard => &[
            ("←/→", "filter"),
            ("t/w/m", "today/week/month"),
            ("n", "new campaign"),
            ("F1/F2", "switch view"),
            ("q", "quit"),
        ],
        UiMode::Composer => &[
            ("Tab", "next field"),
            ("Enter", "newline / activate"),
            ("Ctrl+U", "clear"),
            ("F1", "dashboard"),
            ("Ctrl+C", "quit"),
        ],
        UiMode::AiDialog => &[("Enter", "generate"), ("Esc", "cancel")],
        UiMode::AddButtonDialog => &[("Tab", "switch field"), ("Enter", "save"), ("Esc", "cancel")],
        UiMode::ImagePrompt => &[("Enter", "attach"), ("Esc", "cancel")],
    }
}

pub struct StatusBar {
    mode: UiMode,
}

impl StatusBar {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in hints_for(self.mode).iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_connect_hints() {
        let mut term = TestTerminal::with_size(60, 1);
        term.render_widget(StatusBar::new(UiMode::Connect), term.area());
        assert!(term.buffer_contains("Enter continue (demo)"));
    }

    #[test]
    fn test_every_mode_has_hints() {
        for mode in [
            UiMode::Connect,
            UiMode::Dashboard,
            UiMode::Composer,
            UiMode::AiDialog,
            UiMode::AddButtonDialog,
            UiMode::ImagePrompt,
        ] {
            assert!(!hints_for(mode).is_empty());
        }
    }
}
