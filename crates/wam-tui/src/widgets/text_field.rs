//! Labeled text input

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

const CURSOR: &str = "_";

/// Bordered text input showing a placeholder while empty.
///
/// Single-line fields keep the end of the value visible; multi-line fields
/// show the last lines that fit.
pub struct TextField<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    multiline: bool,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            focused: false,
            multiline: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    fn content_lines(&self, width: usize, height: usize) -> Vec<Line<'static>> {
        if self.value.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            spans.push(Span::styled(self.placeholder.to_string(), styles::placeholder()));
            return vec![Line::from(spans)];
        }

        let raw: Vec<&str> = if self.multiline {
            self.value.split('\n').collect()
        } else {
            vec![self.value]
        };
        let skip = raw.len().saturating_sub(height.max(1));
        let last = raw.len() - 1;

        raw.iter()
            .enumerate()
            .skip(skip)
            .map(|(i, text)| {
                let with_cursor = self.focused && i == last;
                let budget = if with_cursor {
                    width.saturating_sub(1)
                } else {
                    width
                };
                let mut spans = vec![Span::styled(tail_to_width(text, budget), styles::text_primary())];
                if with_cursor {
                    spans.push(Span::styled(CURSOR, styles::accent()));
                }
                Line::from(spans)
            })
            .collect()
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Span::styled(
            format!(" {} ", self.label),
            if self.focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = self.content_lines(inner.width as usize, inner.height as usize);
        Paragraph::new(lines)
            .style(Style::default())
            .render(inner, buf);
    }
}

/// Rightmost part of `text` that fits in `width` terminal columns
pub fn tail_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    text[start..].to_string()
}
