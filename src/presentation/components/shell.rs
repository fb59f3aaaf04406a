//! Shell component
//!
//! Title, the key hints for the mode buttons, and the idle explanation
//! shown while no form is mounted.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::config::Action};

pub const TITLE: &str = "Cellar Form";

const IDLE_TEXT: [&str; 3] = [
    "A small cellar form with field validation. Country is picked from a fixed list \
     and the consume date is typed as YYYY-MM-DD.",
    "Add opens an empty form. Mandatory fields are checked on submit and optional \
     ones are only included if entered.",
    "Edit opens the form pre-filled with an example record. Optional fields without \
     a value start empty.",
];

const BUTTONS: [(Action, &str); 4] = [
    (Action::EnterEdit, "Edit"),
    (Action::EnterAdd, "Add"),
    (Action::Reset, "Reset"),
    (Action::Quit, "Quit"),
];

#[derive(Debug, Clone, Default)]
pub struct ShellComponent;

impl ShellComponent {
    pub fn new() -> Self {
        Self
    }

    /// "<e> Edit  <a> Add ..." for every action that has a binding
    pub fn button_hints(state: &AppState) -> String {
        let keybindings = &state.config.config.keybindings;
        BUTTONS
            .iter()
            .filter_map(|(action, label)| {
                keybindings
                    .sequence_for(*action)
                    .map(|keys| format!("{keys} {label}"))
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Render the two header rows
    pub fn view_header(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let config = &state.config.config;
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        frame.render_widget(
            Paragraph::new(TITLE).style(config.style("title")),
            rows[0],
        );

        let hint = match state.mode.kind() {
            None => Self::button_hints(state),
            Some(kind) => format!("{kind} form open, Esc to leave"),
        };
        frame.render_widget(Paragraph::new(hint).style(config.style("hint")), rows[1]);
    }

    /// Render the idle explanation
    pub fn view_idle(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = IDLE_TEXT
            .iter()
            .flat_map(|paragraph| [Line::raw(*paragraph), Line::raw("")])
            .collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(state.config.config.style("card"));
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}
