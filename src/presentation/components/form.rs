//! Form card component
//!
//! Renders the mounted form as a bordered card: Rack and Shelf side by side,
//! Cost and Country side by side, then Consume and the submit row.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{form::FormState, AppState},
    domain::{form::DATE_DISPLAY_FORMAT, validation::FieldName},
    presentation::widgets::field::{FieldStyles, FieldValue, FieldWidget, FIELD_HEIGHT},
};

/// Rows inside the card border
const CARD_BODY_HEIGHT: u16 = FIELD_HEIGHT * 3 + 2;

const CARD_MIN_WIDTH: u16 = 48;

const SUBMIT_LABEL: &str = "[ Submit ]";

const FORM_HINT: &str = "Enter submit  Tab/Shift+Tab move  Esc cancel";

#[derive(Debug, Clone, Default)]
pub struct FormComponent;

impl FormComponent {
    pub fn new() -> Self {
        Self
    }

    /// Card area: half the width (never narrower than the minimum), anchored
    /// top-left with a one-column margin.
    pub fn card_area(area: Rect) -> Rect {
        let width = (area.width / 2).max(CARD_MIN_WIDTH).min(area.width);
        let height = (CARD_BODY_HEIGHT + 2).min(area.height);
        let x = area.x + u16::from(area.width > width);
        Rect::new(x, area.y, width.min(area.width.saturating_sub(x - area.x)), height)
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(form) = state.form() else {
            return;
        };
        let config = &state.config.config;
        let styles = FieldStyles {
            label: config.style("label"),
            input: Style::default(),
            focused: config.style("focused"),
            error: config.style("error"),
            hint: config.style("hint"),
        };

        let card = Self::card_area(area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(config.style("card"))
            .title(Span::styled(
                format!(" {} ", form.kind()),
                config.style("title"),
            ));
        let inner = block.inner(card);
        frame.render_widget(Clear, card);
        frame.render_widget(block, card);

        let rows = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);
        let pair = |row: Rect| {
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(1)
                .split(row)
        };
        let first = pair(rows[0]);
        let second = pair(rows[1]);
        let placements = [
            (FieldName::Rack, first[0]),
            (FieldName::Shelf, first[1]),
            (FieldName::Cost, second[0]),
            (FieldName::Country, second[1]),
            (FieldName::Consume, rows[2]),
        ];

        let consume_suffix = form
            .consume_date()
            .map(|date| date.format(DATE_DISPLAY_FORMAT).to_string());
        for (field, slot) in placements {
            let widget = field_widget(form, field, styles, consume_suffix.clone());
            if form.focus() == field {
                if let Some(position) = widget.cursor_position(slot) {
                    frame.set_cursor_position(position);
                }
            }
            frame.render_widget(widget, slot);
        }

        frame.render_widget(
            Paragraph::new(SUBMIT_LABEL).style(styles.label),
            rows[3],
        );
        frame.render_widget(Paragraph::new(FORM_HINT).style(styles.hint), rows[4]);
    }
}

fn label(field: FieldName) -> &'static str {
    match field {
        FieldName::Rack => "Rack",
        FieldName::Shelf => "Shelf",
        FieldName::Cost => "Cost",
        FieldName::Country => "Country",
        FieldName::Consume => "Consume",
    }
}

fn placeholder(field: FieldName) -> &'static str {
    match field {
        FieldName::Rack => "rack..",
        FieldName::Shelf => "shelf..",
        FieldName::Cost => "cost..",
        FieldName::Country => "Select a country",
        FieldName::Consume => "Pick a date (YYYY-MM-DD)",
    }
}

fn field_widget(
    form: &FormState,
    field: FieldName,
    styles: FieldStyles,
    consume_suffix: Option<String>,
) -> FieldWidget<'_> {
    let value = match form.text(field) {
        Some(buffer) => FieldValue::Text {
            buffer,
            placeholder: placeholder(field),
            suffix: (field == FieldName::Consume)
                .then_some(consume_suffix)
                .flatten(),
        },
        None => FieldValue::Select {
            selected: form.country().to_string(),
        },
    };
    FieldWidget::new(label(field), value, styles)
        .message(form.message_for(field))
        .focused(form.focus() == field)
}
