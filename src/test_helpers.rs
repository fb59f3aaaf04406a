use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        cmd::Cmd,
        msg::{mode::ModeMsg, Msg},
        raw_msg::RawMsg,
        state::{form::FormState, AppState},
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    domain::{
        form::{FormDraft, FormValues, Submission},
        validation::FieldName,
    },
    infrastructure::{config::Config, tui::textarea_engine::TuiTextAreaEngine},
};

static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;

/// Test helper that drives keys through translate → update without a terminal.
/// Provides a fluent API for common form scenarios and collects the
/// emitted commands.
pub struct FormTestHelper {
    state: AppState,
    commands: Vec<Cmd>,
}

impl FormTestHelper {
    /// Helper starting from `state`
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            commands: Vec::new(),
        }
    }

    /// Helper with default keybindings and styles
    pub fn with_defaults(today: NaiveDate) -> Self {
        let config = Config::defaults().unwrap_or_default();
        Self::new(AppState::new_with_config(today, config))
    }

    /// Send a message through the update cycle
    pub fn send_message(&mut self, msg: Msg) -> &mut Self {
        let ctx = UpdateContext { text_area: &ENGINE };
        let (new_state, cmds) = update_with_context(msg, self.state.clone(), &ctx);
        self.state = new_state;
        self.commands.extend(cmds);
        self
    }

    pub fn open_add(&mut self) -> &mut Self {
        self.send_message(Msg::Mode(ModeMsg::EnterAdd))
    }

    pub fn open_edit(&mut self) -> &mut Self {
        let example = FormValues::example(self.state.today);
        self.send_message(Msg::Mode(ModeMsg::EnterEdit(example)))
    }

    /// Press a key through the translator
    pub fn press_key(&mut self, key: KeyEvent) -> &mut Self {
        for msg in translate_raw_to_domain(RawMsg::Key(key), &self.state) {
            self.send_message(msg);
        }
        self
    }

    pub fn press(&mut self, code: KeyCode) -> &mut Self {
        self.press_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn press_ctrl(&mut self, c: char) -> &mut Self {
        self.press_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    pub fn press_alt(&mut self, code: KeyCode) -> &mut Self {
        self.press_key(KeyEvent::new(code, KeyModifiers::ALT))
    }

    /// Type text character by character
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
        self
    }

    /// Tab until `field` has focus
    pub fn focus(&mut self, field: FieldName) -> &mut Self {
        for _ in 0..5 {
            if self.form().map(FormState::focus) == Some(field) {
                break;
            }
            self.press(KeyCode::Tab);
        }
        self
    }

    pub fn submit(&mut self) -> &mut Self {
        self.press(KeyCode::Enter)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn form(&self) -> Option<&FormState> {
        self.state.form()
    }

    pub fn draft(&self) -> Option<FormDraft> {
        self.form().map(FormState::draft)
    }

    pub fn message_for(&self, field: FieldName) -> Option<String> {
        self.form()
            .and_then(|form| form.message_for(field))
            .map(str::to_owned)
    }

    /// Submissions emitted so far, in order
    pub fn submissions(&self) -> Vec<Submission> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                Cmd::Complete(submission) => Some(submission.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn commands(&self) -> &[Cmd] {
        &self.commands
    }
}
