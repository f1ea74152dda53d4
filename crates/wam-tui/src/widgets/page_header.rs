//! Page title with a one-line description

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

pub struct PageHeader<'a> {
    title: &'a str,
    subtitle: &'a str,
}

impl<'a> PageHeader<'a> {
    pub fn new(title: &'a str, subtitle: &'a str) -> Self {
        Self { title, subtitle }
    }
}

impl Widget for PageHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![
            Line::styled(self.title, styles::title()),
            Line::styled(self.subtitle, styles::text_secondary()),
        ])
        .render(area, buf);
    }
}
