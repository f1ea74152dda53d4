//! "Generate with AI" dialog

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};
use wam_app::ai_dialog::{AiGeneratorState, PROMPT_PLACEHOLDER};

use super::modal_overlay;
use super::text_field::TextField;
use crate::theme::{icons::IconSet, palette, styles};

pub const AI_DIALOG_TITLE: &str = "Generate with AI";
const AI_DIALOG_DESCRIPTION: &str =
    "Describe the goal of your message, and AI will write it for you.";

pub struct AiDialog<'a> {
    dialog: &'a AiGeneratorState,
    icons: IconSet,
    tick: u64,
}

impl<'a> AiDialog<'a> {
    pub fn new(dialog: &'a AiGeneratorState, icons: IconSet, tick: u64) -> Self {
        Self {
            dialog,
            icons,
            tick,
        }
    }

    fn buttons_line(&self) -> Line<'static> {
        let generate = if self.dialog.is_loading() {
            Span::styled(
                format!(" {} Generating... ", self.icons.spinner(self.tick)),
                Style::default().fg(palette::ACCENT_AI),
            )
        } else {
            Span::styled(
                format!(" {} Generate ", self.icons.sparkle()),
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(palette::ACCENT_AI),
            )
        };
        Line::from(vec![
            Span::styled(" Cancel ", styles::text_secondary()),
            Span::raw("  "),
            generate,
        ])
        .alignment(Alignment::Right)
    }
}

impl Widget for AiDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare_modal(buf, area, 64, 12);
        let block = styles::modal_block(AI_DIALOG_TITLE);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [description, prompt, error, _, buttons] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(AI_DIALOG_DESCRIPTION)
            .style(styles::text_secondary())
            .wrap(Wrap { trim: true })
            .render(description, buf);

        TextField::new("Prompt", &self.dialog.prompt)
            .placeholder(PROMPT_PLACEHOLDER)
            .focused(!self.dialog.is_loading())
            .render(prompt, buf);

        if let Some(message) = self.dialog.error() {
            Paragraph::new(Line::styled(message, styles::error())).render(error, buf);
        }

        Paragraph::new(self.buttons_line()).render(buttons, buf);
    }
}
