//! "Add a Website Button" dialog

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};
use wam_app::add_button_dialog::{AddButtonField, AddButtonState};

use super::modal_overlay;
use super::text_field::TextField;
use crate::theme::styles;

pub const ADD_BUTTON_TITLE: &str = "Add a Website Button";
const ADD_BUTTON_DESCRIPTION: &str =
    "Enter the text for your button and the URL it should link to.";
const LABEL_PLACEHOLDER: &str = "e.g., Shop Now, Learn More";
const URL_PLACEHOLDER: &str = "https://www.example.com";

pub struct AddButtonDialog<'a> {
    dialog: &'a AddButtonState,
}

impl<'a> AddButtonDialog<'a> {
    pub fn new(dialog: &'a AddButtonState) -> Self {
        Self { dialog }
    }
}

impl Widget for AddButtonDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare_modal(buf, area, 64, 15);
        let block = styles::modal_block(ADD_BUTTON_TITLE);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [description, label, url, error, _, buttons] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(ADD_BUTTON_DESCRIPTION)
            .style(styles::text_secondary())
            .wrap(Wrap { trim: true })
            .render(description, buf);

        TextField::new("Button Text", &self.dialog.label)
            .placeholder(LABEL_PLACEHOLDER)
            .focused(self.dialog.field == AddButtonField::Label)
            .render(label, buf);
        TextField::new("URL", &self.dialog.url)
            .placeholder(URL_PLACEHOLDER)
            .focused(self.dialog.field == AddButtonField::Url)
            .render(url, buf);

        if let Some(message) = self.dialog.error() {
            Paragraph::new(Line::styled(message, styles::error())).render(error, buf);
        }

        Paragraph::new(
            Line::from(vec![
                Span::styled(" Cancel ", styles::text_secondary()),
                Span::raw("  "),
                Span::styled(" Save Button ", styles::focused_selected()),
            ])
            .alignment(Alignment::Right),
        )
        .render(buttons, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(dialog: &AddButtonState) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 20);
        term.render_widget(AddButtonDialog::new(dialog), term.area());
        term
    }

    #[test]
    fn test_empty_dialog_shows_placeholders() {
        let term = render(&AddButtonState::new());

        assert!(term.buffer_contains(ADD_BUTTON_TITLE));
        assert!(term.buffer_contains(LABEL_PLACEHOLDER));
        assert!(term.buffer_contains(URL_PLACEHOLDER));
        assert!(term.buffer_contains("Save Button"));
    }

    #[test]
    fn test_invalid_url_error_shown() {
        let mut dialog = AddButtonState::new();
        dialog.label = "Shop".to_string();
        dialog.url = "nope".to_string();
        let _ = dialog.save();

        let term = render(&dialog);
        assert!(term.buffer_contains("Please enter a valid URL"));
        assert!(term.buffer_contains("nope"));
    }
}
