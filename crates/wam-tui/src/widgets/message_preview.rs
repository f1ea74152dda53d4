//! Phone-style live preview of the draft message

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};
use wam_core::MessagePreview as PreviewData;

use crate::theme::{icons::IconSet, palette, styles};

const PHONE_MAX_WIDTH: u16 = 40;

/// Renders a [`PreviewData`] inside a phone frame.
///
/// Order inside the bubble: image line, message text (or the placeholder),
/// then one line per call-to-action.
pub struct MessagePreview<'a> {
    preview: PreviewData<'a>,
    icons: IconSet,
}

impl<'a> MessagePreview<'a> {
    pub fn new(preview: PreviewData<'a>, icons: IconSet) -> Self {
        Self { preview, icons }
    }

    fn bubble_lines(&self) -> Vec<Line<'a>> {
        let bubble = Style::default().bg(palette::BUBBLE_BG);
        let mut lines = Vec::new();

        if let Some(image) = self.preview.image {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", self.icons.image()), bubble.fg(palette::ACCENT)),
                Span::styled(image.file_name().to_string(), bubble.fg(palette::TEXT_PRIMARY)),
                Span::styled(format!(" ({})", image.size_label()), bubble.fg(palette::TEXT_SECONDARY)),
            ]));
            lines.push(Line::default());
        }

        let text_style = if self.preview.is_placeholder {
            bubble.fg(palette::TEXT_MUTED)
        } else {
            bubble.fg(palette::TEXT_PRIMARY)
        };
        for text in self.preview.text.split('\n') {
            lines.push(Line::styled(text, text_style));
        }

        if !self.preview.buttons.is_empty() {
            lines.push(Line::default());
        }
        for cta in self.preview.buttons {
            lines.push(
                Line::from(vec![
                    Span::styled(format!("{} ", self.icons.link()), Style::default().fg(palette::LINK_FG)),
                    Span::styled(cta.label().to_string(), Style::default().fg(palette::LINK_FG)),
                ])
                .alignment(Alignment::Center),
            );
        }
        lines
    }
}

impl Widget for MessagePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.min(PHONE_MAX_WIDTH);
        let phone_area = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };

        let phone = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(styles::border_inactive())
            .title(Span::styled(" Preview ", styles::title()))
            .style(Style::default().bg(palette::PHONE_SCREEN_BG));
        let screen = phone.inner(phone_area);
        phone.render(phone_area, buf);

        let [_, bubble_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(screen);
        let [_, bubble_area, _] = Layout::horizontal([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(bubble_area);

        Paragraph::new(self.bubble_lines())
            .wrap(Wrap { trim: false })
            .style(Style::default().bg(palette::BUBBLE_BG))
            .render(bubble_area, buf);
    }
}
