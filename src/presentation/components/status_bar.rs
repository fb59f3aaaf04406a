//! Status bar component
//!
//! One row at the bottom: the current mode and the latest status message
//! (completion notifications, errors).

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn mode_label(state: &AppState) -> String {
        state
            .mode
            .kind()
            .map_or_else(|| "Idle".to_owned(), |kind| kind.to_string())
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let style = state.config.config.style("status");
        let mut spans = vec![Span::styled(
            format!(" {} ", Self::mode_label(state)),
            style.add_modifier(Modifier::REVERSED),
        )];
        if let Some(message) = state.system.status_message() {
            spans.push(Span::raw(" "));
            spans.push(Span::raw(message.as_str()));
        }
        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::core::state::{form::FormState, Mode};

    #[test]
    fn test_mode_label() {
        let mut state = AppState::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default());
        assert_eq!(StatusBarComponent::mode_label(&state), "Idle");
        state.mode = Mode::Add(FormState::add());
        assert_eq!(StatusBarComponent::mode_label(&state), "Add");
    }
}
