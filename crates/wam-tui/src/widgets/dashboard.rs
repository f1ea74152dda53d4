//! Dashboard view: static counters and a cosmetic date filter

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use wam_core::{DashboardFilter, StatCard, CHART_PLACEHOLDER, DASHBOARD_STATS};

use super::page_header::PageHeader;
use crate::theme::{icons::IconSet, styles};

pub const DASHBOARD_SUBTITLE: &str = "An overview of your campaign performance.";

/// Below this width the four cards are laid out 2x2
const FOUR_ACROSS_MIN_WIDTH: u16 = 84;

pub struct Dashboard {
    filter: DashboardFilter,
    icons: IconSet,
}

impl Dashboard {
    pub fn new(filter: DashboardFilter, icons: IconSet) -> Self {
        Self { filter, icons }
    }

    fn filter_tabs(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, filter) in DashboardFilter::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if *filter == self.filter {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", filter.label()), style));
        }
        Line::from(spans)
    }

    fn render_card(&self, card: &StatCard, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(vec![
            Line::from(Span::styled(self.icons.stat(card.icon), styles::accent())),
            Line::from(Span::styled(card.title, styles::text_secondary())),
            Line::from(Span::styled(card.value, styles::title())),
        ])
        .render(inner, buf);
    }
}

impl Widget for Dashboard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, card_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        PageHeader::new("Dashboard", DASHBOARD_SUBTITLE).render(header_area, buf);

        let card = styles::glass_block(false)
            .title(Span::styled(" Analytics ", styles::title()))
            .title(self.filter_tabs().right_aligned());
        let inner = card.inner(card_area);
        card.render(card_area, buf);

        let four_across = inner.width >= FOUR_ACROSS_MIN_WIDTH;
        let grid_height = if four_across { 5 } else { 10 };
        let [grid_area, _, chart_area] = Layout::vertical([
            Constraint::Length(grid_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let cells: Vec<Rect> = if four_across {
            Layout::horizontal([Constraint::Ratio(1, 4); 4])
                .split(grid_area)
                .to_vec()
        } else {
            Layout::vertical([Constraint::Length(5); 2])
                .split(grid_area)
                .iter()
                .flat_map(|row| Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(*row).to_vec())
                .collect()
        };
        for (stat, cell) in DASHBOARD_STATS.iter().zip(cells) {
            self.render_card(stat, cell, buf);
        }

        Paragraph::new(vec![
            Line::from(Span::styled(self.icons.chart(), styles::text_muted())),
            Line::from(Span::styled(CHART_PLACEHOLDER, styles::text_muted())),
        ])
        .alignment(Alignment::Center)
        .render(chart_area, buf);
    }
}
