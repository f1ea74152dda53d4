//! Navigation sidebar

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use wam_core::ViewSelector;

use crate::theme::{icons::IconSet, styles};

pub const APP_TITLE: &str = "WA Manager";

pub struct Sidebar {
    active: ViewSelector,
    icons: IconSet,
}

impl Sidebar {
    pub fn new(active: ViewSelector, icons: IconSet) -> Self {
        Self { active, icons }
    }

    fn icon_for(&self, view: ViewSelector) -> &'static str {
        match view {
            ViewSelector::Dashboard => self.icons.dashboard(),
            ViewSelector::NewCampaign => self.icons.add(),
        }
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(styles::border_inactive());
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", self.icons.logo()), styles::accent_bold()),
                Span::styled(APP_TITLE, styles::title()),
            ]),
            Line::default(),
        ];

        for (idx, view) in ViewSelector::ALL.iter().enumerate() {
            let label = format!(" {} {:<14}F{} ", self.icon_for(*view), view.label(), idx + 1);
            let style = if *view == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            lines.push(Line::from(Span::styled(label, style)));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
