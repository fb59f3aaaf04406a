use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::textarea::TextAreaState,
    domain::text::{head_to_width, tail_to_width, truncate_to_width},
};

/// Styles shared by every field in the card
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldStyles {
    pub label: Style,
    pub input: Style,
    pub focused: Style,
    pub error: Style,
    pub hint: Style,
}

/// What a field shows on its input row
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Editable single-line text with a cursor
    Text {
        buffer: &'a TextAreaState,
        placeholder: &'a str,
        /// Extra text rendered after the input, e.g. the long-form date
        suffix: Option<String>,
    },
    /// A closed choice cycled with arrows
    Select { selected: String },
}

/// Three-row field: label, input, inline message.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWidget<'a> {
    label: &'a str,
    value: FieldValue<'a>,
    message: Option<&'a str>,
    focused: bool,
    styles: FieldStyles,
}

/// Rows a field occupies
pub const FIELD_HEIGHT: u16 = 3;

const MARKER: &str = "> ";

impl<'a> FieldWidget<'a> {
    pub fn new(label: &'a str, value: FieldValue<'a>, styles: FieldStyles) -> Self {
        Self {
            label,
            value,
            message: None,
            focused: false,
            styles,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Input row text and, for a focused text field, the cursor column
    /// relative to the start of the input.
    fn input_text(&self, width: usize) -> (String, Option<usize>) {
        match &self.value {
            FieldValue::Text {
                buffer,
                placeholder,
                ..
            } if buffer.is_empty() => (
                truncate_to_width(placeholder, width),
                self.focused.then_some(0),
            ),
            FieldValue::Text { buffer, .. } => {
                let before: String = buffer
                    .content
                    .chars()
                    .take(buffer.cursor_column())
                    .collect();
                let (text, cursor) = if before.width() < width {
                    (truncate_to_width(&buffer.content, width), before.width())
                } else {
                    // Scroll so the cursor sits in the last column, then fill
                    // whatever room is left with the text after it
                    let (visible, _) = tail_to_width(&before, width.saturating_sub(1));
                    let after: String = buffer
                        .content
                        .chars()
                        .skip(buffer.cursor_column())
                        .collect();
                    let rest = head_to_width(&after, width - visible.width());
                    (format!("{visible}{rest}"), visible.width())
                };
                (text, self.focused.then_some(cursor))
            }
            FieldValue::Select { selected } => {
                let text = if self.focused {
                    format!("< {selected} >")
                } else {
                    selected.clone()
                };
                (truncate_to_width(&text, width), None)
            }
        }
    }

    /// Where the terminal cursor goes when this field is focused
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if area.height < 2 || area.width as usize <= MARKER.width() {
            return None;
        }
        let width = area.width as usize - MARKER.width();
        let (_, cursor) = self.input_text(width);
        let column = cursor?;
        let x = area.x + (MARKER.width() + column.min(width.saturating_sub(1))) as u16;
        Some(Position::new(x, area.y + 1))
    }
}

impl Widget for FieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let rows = Layout::vertical([Constraint::Length(1); 3]).split(area);

        Paragraph::new(truncate_to_width(self.label, area.width as usize))
            .style(self.styles.label)
            .render(rows[0], buf);

        let marker = if self.focused { MARKER } else { "  " };
        let width = (area.width as usize).saturating_sub(MARKER.width());
        let (text, _) = self.input_text(width);
        let placeholder = matches!(&self.value, FieldValue::Text { buffer, .. } if buffer.is_empty());
        let input_style = if placeholder {
            self.styles.hint
        } else if self.focused {
            self.styles.focused
        } else {
            self.styles.input
        };
        let mut spans = vec![Span::raw(marker), Span::styled(text.clone(), input_style)];
        if let FieldValue::Text {
            suffix: Some(suffix),
            ..
        } = &self.value
        {
            let room = width.saturating_sub(text.width() + 2);
            if room > 0 {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(truncate_to_width(suffix, room), self.styles.hint));
            }
        }
        Paragraph::new(Line::from(spans)).render(rows[1], buf);

        if let Some(message) = self.message {
            Paragraph::new(truncate_to_width(message, area.width as usize))
                .style(self.styles.error)
                .render(rows[2], buf);
        }
    }
}
