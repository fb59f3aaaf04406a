use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{form::FormMsg, mode::ModeMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::{form::FormState, AppState},
    },
    domain::{form::FormValues, validation::FieldName},
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(text, state),

        // Feedback from commands
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    match state.form() {
        Some(form) => translate_form_keys(key, form),
        None => translate_shell_keys(key, state),
    }
}

/// Key bindings while a form is mounted
fn translate_form_keys(key: KeyEvent, form: &FormState) -> Vec<Msg> {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => return vec![Msg::Mode(ModeMsg::Reset)],
        (KeyCode::Enter, _) | (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            return vec![Msg::Form(FormMsg::Submit)]
        }
        (KeyCode::Tab, _) => return vec![Msg::Form(FormMsg::FocusNext)],
        (KeyCode::BackTab, _) => return vec![Msg::Form(FormMsg::FocusPrev)],
        _ => {}
    }

    match form.focus() {
        FieldName::Country => translate_country_keys(key),
        FieldName::Consume => translate_consume_keys(key),
        _ => translate_text_keys(key),
    }
}

/// Up/Down move focus; everything else goes to the focused TextArea
fn translate_text_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Down => vec![Msg::Form(FormMsg::FocusNext)],
        KeyCode::Up => vec![Msg::Form(FormMsg::FocusPrev)],
        _ => vec![Msg::Form(FormMsg::ProcessTextAreaInput(key))],
    }
}

fn translate_country_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Left => vec![Msg::Form(FormMsg::CountryPrev)],
        KeyCode::Right | KeyCode::Char(' ') => vec![Msg::Form(FormMsg::CountryNext)],
        KeyCode::Down => vec![Msg::Form(FormMsg::FocusNext)],
        KeyCode::Up => vec![Msg::Form(FormMsg::FocusPrev)],
        KeyCode::Char(c) if c.is_alphabetic() && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            vec![Msg::Form(FormMsg::CountryJump(c))]
        }
        _ => vec![],
    }
}

fn translate_consume_keys(key: KeyEvent) -> Vec<Msg> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => vec![Msg::Form(FormMsg::SetConsumeToday)],
        (KeyCode::Up, KeyModifiers::ALT) => vec![Msg::Form(FormMsg::ShiftConsume(1))],
        (KeyCode::Down, KeyModifiers::ALT) => vec![Msg::Form(FormMsg::ShiftConsume(-1))],
        _ => translate_text_keys(key),
    }
}

/// Key bindings when no form is mounted (flat mapping from config)
fn translate_shell_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::EnterAdd => vec![Msg::Mode(ModeMsg::EnterAdd)],
        Action::EnterEdit => vec![Msg::Mode(ModeMsg::EnterEdit(FormValues::example(
            state.today,
        )))],
        Action::Reset => vec![Msg::Mode(ModeMsg::Reset)],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
    }
}

/// Pasted text only lands in a focused text field
fn translate_paste(text: String, state: &AppState) -> Vec<Msg> {
    match state.form() {
        Some(form) if form.focus().is_text() => vec![Msg::Form(FormMsg::Paste(text))],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::state::Mode, infrastructure::config::Config,
        presentation::config::keybindings::KeyBindings,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn create_test_state() -> AppState {
        let mut bindings = HashMap::new();
        bindings.insert(vec![key(KeyCode::Char('a'))], Action::EnterAdd);
        bindings.insert(vec![key(KeyCode::Char('e'))], Action::EnterEdit);
        bindings.insert(vec![key(KeyCode::Char('r'))], Action::Reset);
        bindings.insert(vec![key(KeyCode::Char('q'))], Action::Quit);

        let config = Config {
            keybindings: KeyBindings(bindings),
            ..Default::default()
        };
        AppState::new_with_config(today(), config)
    }

    fn with_form(focus: FieldName) -> AppState {
        let mut state = create_test_state();
        let mut form = FormState::add();
        form.set_focus(focus);
        state.mode = Mode::Add(form);
        state
    }

    #[test]
    fn test_translate_system_events() {
        let state = create_test_state();

        assert_eq!(
            translate_raw_to_domain(RawMsg::Quit, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(100, 50), &state),
            vec![Msg::System(SystemMsg::Resize(100, 50))]
        );
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
    }

    #[test]
    fn test_shell_keybindings() {
        let state = create_test_state();

        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('a'))), &state),
            vec![Msg::Mode(ModeMsg::EnterAdd)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('e'))), &state),
            vec![Msg::Mode(ModeMsg::EnterEdit(FormValues::example(today())))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('r'))), &state),
            vec![Msg::Mode(ModeMsg::Reset)]
        );
        assert!(translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('x'))), &state).is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for state in [create_test_state(), with_form(FieldName::Rack)] {
            assert_eq!(
                translate_raw_to_domain(RawMsg::Key(ctrl_c), &state),
                vec![Msg::System(SystemMsg::Quit)]
            );
        }
    }

    #[test]
    fn test_mode_letters_are_typed_while_form_open() {
        let state = with_form(FieldName::Rack);
        let a = key(KeyCode::Char('a'));
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(a), &state),
            vec![Msg::Form(FormMsg::ProcessTextAreaInput(a))]
        );
    }

    #[test]
    fn test_form_navigation_and_submit() {
        let state = with_form(FieldName::Shelf);

        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Tab)), &state),
            vec![Msg::Form(FormMsg::FocusNext)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::BackTab)), &state),
            vec![Msg::Form(FormMsg::FocusPrev)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Up)), &state),
            vec![Msg::Form(FormMsg::FocusPrev)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Enter)), &state),
            vec![Msg::Form(FormMsg::Submit)]
        );
        assert_eq!(
            translate_raw_to_domain(
                RawMsg::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
                &state
            ),
            vec![Msg::Form(FormMsg::Submit)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Esc)), &state),
            vec![Msg::Mode(ModeMsg::Reset)]
        );
    }

    #[test]
    fn test_country_select_keys() {
        let state = with_form(FieldName::Country);

        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Right)), &state),
            vec![Msg::Form(FormMsg::CountryNext)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char(' '))), &state),
            vec![Msg::Form(FormMsg::CountryNext)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Left)), &state),
            vec![Msg::Form(FormMsg::CountryPrev)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('g'))), &state),
            vec![Msg::Form(FormMsg::CountryJump('g'))]
        );
        assert!(translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('7'))), &state).is_empty());
    }

    #[test]
    fn test_consume_helpers() {
        let state = with_form(FieldName::Consume);

        assert_eq!(
            translate_raw_to_domain(
                RawMsg::Key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)),
                &state
            ),
            vec![Msg::Form(FormMsg::SetConsumeToday)]
        );
        assert_eq!(
            translate_raw_to_domain(
                RawMsg::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::ALT)),
                &state
            ),
            vec![Msg::Form(FormMsg::ShiftConsume(1))]
        );
        assert_eq!(
            translate_raw_to_domain(
                RawMsg::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::ALT)),
                &state
            ),
            vec![Msg::Form(FormMsg::ShiftConsume(-1))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Down)), &state),
            vec![Msg::Form(FormMsg::FocusNext)]
        );
    }

    #[test]
    fn test_paste_only_into_text_fields() {
        let text_state = with_form(FieldName::Shelf);
        assert_eq!(
            translate_raw_to_domain(RawMsg::Paste("Top".into()), &text_state),
            vec![Msg::Form(FormMsg::Paste("Top".into()))]
        );

        let select_state = with_form(FieldName::Country);
        assert!(translate_raw_to_domain(RawMsg::Paste("Top".into()), &select_state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Paste("Top".into()), &create_test_state()).is_empty());
    }

    #[test]
    fn test_feedback_messages() {
        let state = create_test_state();
        assert_eq!(
            translate_raw_to_domain(RawMsg::SystemMessage("Add {}".into()), &state),
            vec![Msg::System(SystemMsg::UpdateStatusMessage("Add {}".into()))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Error("boom".into()), &state),
            vec![Msg::System(SystemMsg::ShowError("boom".into()))]
        );
    }
}
