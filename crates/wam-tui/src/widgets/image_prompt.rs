//! Image path prompt

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};
use wam_app::image_prompt::{ImagePathState, IMAGE_FORMAT_HINT};

use super::modal_overlay;
use super::text_field::TextField;
use crate::theme::styles;

pub const IMAGE_PROMPT_TITLE: &str = "Add Image";

pub struct ImagePrompt<'a> {
    prompt: &'a ImagePathState,
}

impl<'a> ImagePrompt<'a> {
    pub fn new(prompt: &'a ImagePathState) -> Self {
        Self { prompt }
    }
}

impl Widget for ImagePrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare_modal(buf, area, 64, 8);
        let block = styles::modal_block(IMAGE_PROMPT_TITLE);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [field, hint] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(inner);

        TextField::new("Image path", &self.prompt.path)
            .placeholder("~/Pictures/banner.png")
            .focused(true)
            .render(field, buf);
        Paragraph::new(Line::styled(
            format!("Supported: {}", IMAGE_FORMAT_HINT),
            styles::text_muted(),
        ))
        .render(hint, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_prompt_shows_hint_and_path() {
        let mut term = TestTerminal::with_size(80, 12);
        let state = ImagePathState {
            path: "/tmp/sale.png".to_string(),
        };
        term.render_widget(ImagePrompt::new(&state), term.area());

        assert!(term.buffer_contains(IMAGE_PROMPT_TITLE));
        assert!(term.buffer_contains("/tmp/sale.png"));
        assert!(term.buffer_contains(IMAGE_FORMAT_HINT));
    }
}
