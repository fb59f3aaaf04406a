//! Component collection
//!
//! Components are stateless renderers; the whole screen is a function of
//! `AppState`.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod form;
pub mod shell;
pub mod status_bar;

pub use form::FormComponent;
pub use shell::ShellComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub shell: ShellComponent,
    pub form: FormComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the whole screen
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let layout = Layout::vertical([
            Constraint::Length(2), // title + hints
            Constraint::Min(0),    // idle text or form card
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

        self.shell.view_header(state, frame, layout[0]);
        if state.mode.is_open() {
            self.form.view(state, frame, layout[1]);
        } else {
            self.shell.view_idle(state, frame, layout[1]);
        }
        self.status_bar.view(state, frame, layout[2]);
    }
}
