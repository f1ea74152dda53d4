//! Campaign composer form

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use wam_app::composer::{ComposerFocus, ComposerState};
use wam_core::MAX_BUTTONS;

use super::page_header::PageHeader;
use super::text_field::TextField;
use crate::theme::{icons::IconSet, palette, styles};

pub const COMPOSER_TITLE: &str = "Create New Campaign";
pub const COMPOSER_SUBTITLE: &str = "Design your message and send it to your customers.";

const CAMPAIGN_NAME_PLACEHOLDER: &str = "e.g., Summer Sale 2024";
const SHEET_LINK_PLACEHOLDER: &str = "Link to your customer data sheet";
const MESSAGE_PLACEHOLDER: &str = "Type your message here...";

pub struct ComposerForm<'a> {
    composer: &'a ComposerState,
    icons: IconSet,
}

impl<'a> ComposerForm<'a> {
    pub fn new(composer: &'a ComposerState, icons: IconSet) -> Self {
        Self { composer, icons }
    }

    fn is_focused(&self, focus: ComposerFocus) -> bool {
        self.composer.focus == focus
    }

    fn action_button(&self, focus: ComposerFocus, icon: &str, label: String, accent: Style) -> Span<'static> {
        let style = if self.is_focused(focus) {
            styles::focused_selected()
        } else {
            accent
        };
        Span::styled(format!(" {} {} ", icon, label), style)
    }

    fn actions_line(&self) -> Line<'static> {
        let draft = &self.composer.draft;
        let button_label = format!("Add Button ({}/{})", draft.buttons().len(), MAX_BUTTONS);
        let button_style = if draft.is_at_button_capacity() {
            styles::text_muted()
        } else {
            styles::text_primary()
        };

        Line::from(vec![
            self.action_button(
                ComposerFocus::GenerateAi,
                self.icons.sparkle(),
                "Generate with AI".to_string(),
                Style::default().fg(palette::ACCENT_AI),
            ),
            Span::raw("  "),
            self.action_button(
                ComposerFocus::AddImage,
                self.icons.image(),
                "Add Image".to_string(),
                styles::text_primary(),
            ),
            Span::raw("  "),
            self.action_button(ComposerFocus::AddButton, self.icons.button(), button_label, button_style),
        ])
    }

    fn attachment_line(&self) -> Line<'static> {
        match self.composer.draft.image() {
            Some(image) => Line::from(vec![
                Span::styled(format!("{} ", self.icons.check()), styles::accent()),
                Span::styled(image.file_name().to_string(), styles::text_secondary()),
            ]),
            None if self.composer.pending_image().is_some() => {
                Line::styled("Reading image...", styles::text_muted())
            }
            None => Line::default(),
        }
    }
}

impl Widget for ComposerForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, name, sheet, message, actions, attachment, _, send] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        PageHeader::new(COMPOSER_TITLE, COMPOSER_SUBTITLE).render(header, buf);

        let draft = &self.composer.draft;
        TextField::new("Campaign Name", &draft.campaign_name)
            .placeholder(CAMPAIGN_NAME_PLACEHOLDER)
            .focused(self.is_focused(ComposerFocus::CampaignName))
            .render(name, buf);
        TextField::new("Google Sheet Link", &draft.sheet_link)
            .placeholder(SHEET_LINK_PLACEHOLDER)
            .focused(self.is_focused(ComposerFocus::SheetLink))
            .render(sheet, buf);
        TextField::new("Message", draft.message_text())
            .placeholder(MESSAGE_PLACEHOLDER)
            .focused(self.is_focused(ComposerFocus::Message))
            .multiline()
            .render(message, buf);

        Paragraph::new(self.actions_line()).render(actions, buf);
        Paragraph::new(self.attachment_line()).render(attachment, buf);

        let send_style = if self.is_focused(ComposerFocus::SendCampaign) {
            styles::focused_selected()
        } else {
            styles::accent_bold()
        };
        Paragraph::new(Line::styled(" Send Campaign ", send_style)).render(send, buf);
    }
}
