//! Full-screen "link your phone" overlay

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use wam_app::connect::{ConnectOverlayState, PairingStatus, LINK_INSTRUCTIONS};

use super::modal_overlay;
use crate::theme::{icons::IconSet, styles};

pub const CONNECT_TITLE: &str = "Use WhatsApp on your computer";
pub const CONTINUE_LABEL: &str = "Continue to Dashboard (Demo)";

/// Stand-in for the scannable code once "ready"
const PAIRING_PATTERN: [&str; 5] = [
    "█▀▀▀█ ▄▀▄ █▀▀▀█",
    "█ ▀ █ ▀█▀ █ ▀ █",
    "▀▀▀▀▀ █▄█ ▀▀▀▀▀",
    "▄▀▄█▀ ▀▄▀ █▄▀▄▀",
    "█▀▀▀█ ▄█▄ ▀█▀▄█",
];

pub struct ConnectOverlay<'a> {
    overlay: &'a ConnectOverlayState,
    icons: IconSet,
    tick: u64,
}

impl<'a> ConnectOverlay<'a> {
    pub fn new(overlay: &'a ConnectOverlayState, icons: IconSet, tick: u64) -> Self {
        Self {
            overlay,
            icons,
            tick,
        }
    }

    fn code_lines(&self) -> Vec<Line<'static>> {
        match self.overlay.status() {
            PairingStatus::Loading => vec![
                Line::default(),
                Line::styled(self.icons.spinner(self.tick), styles::accent()),
                Line::styled("Generating code...", styles::text_muted()),
            ],
            PairingStatus::Ready => PAIRING_PATTERN
                .iter()
                .map(|row| Line::styled(*row, styles::text_bright()))
                .collect(),
        }
    }
}

impl Widget for ConnectOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare_modal(buf, area, 84, 16);
        let block = styles::modal_block(CONNECT_TITLE);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [body, _, footer] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(inner);
        let [steps, code] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(20)]).areas(body);

        let mut lines = vec![Line::default()];
        for (i, step) in LINK_INSTRUCTIONS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!(" {}. ", i + 1), styles::accent_bold()),
                Span::styled(*step, styles::text_primary()),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::styled(" Need help to get started?", styles::link()));
        Paragraph::new(lines).render(steps, buf);

        Paragraph::new(self.code_lines())
            .alignment(Alignment::Center)
            .render(code, buf);

        Paragraph::new(vec![
            Line::styled(format!(" {} ", CONTINUE_LABEL), styles::focused_selected()),
            Line::styled("Press Enter", styles::text_muted()),
        ])
        .alignment(Alignment::Center)
        .render(footer, buf);
    }
}
