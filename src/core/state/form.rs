use chrono::{NaiveDate, TimeDelta};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{state::textarea::TextAreaState, textarea_engine::TextAreaEngine},
    domain::{
        cost,
        country::Country,
        form::{self, FormDraft, FormKind, FormValues, Submission},
        validation::{self, FieldName, ValidationReport},
    },
};

/// State of the mounted form: one buffer per text field, the country
/// selection, focus, and the outcome of the last validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    kind: FormKind,
    initial: Option<FormValues>,
    rack: TextAreaState,
    shelf: TextAreaState,
    cost: TextAreaState,
    consume: TextAreaState,
    country: Country,
    focus: FieldName,
    report: Option<ValidationReport>,
}

impl FormState {
    fn from_draft(kind: FormKind, initial: Option<FormValues>, draft: FormDraft) -> Self {
        Self {
            kind,
            initial,
            rack: TextAreaState::with_content(draft.rack),
            shelf: TextAreaState::with_content(draft.shelf),
            cost: TextAreaState::with_content(draft.cost),
            consume: TextAreaState::with_content(draft.consume),
            country: draft.country,
            focus: FieldName::default(),
            report: None,
        }
    }

    /// Empty form; country starts at its default
    pub fn add() -> Self {
        Self::from_draft(FormKind::Add, None, FormDraft::default())
    }

    /// Form pre-filled from `values`
    pub fn edit(values: FormValues) -> Self {
        let draft = FormDraft::from(&values);
        Self::from_draft(FormKind::Edit, Some(values), draft)
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn initial_values(&self) -> Option<&FormValues> {
        self.initial.as_ref()
    }

    pub fn focus(&self) -> FieldName {
        self.focus
    }

    pub fn country(&self) -> Country {
        self.country
    }

    /// Outcome of the latest validation, `None` until the first submit attempt
    pub fn report(&self) -> Option<&ValidationReport> {
        self.report.as_ref()
    }

    /// Inline message to show under `field`, if any
    pub fn message_for(&self, field: FieldName) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.message_for(field))
    }

    /// Buffer for a text field; `None` for the country select
    pub fn text(&self, field: FieldName) -> Option<&TextAreaState> {
        match field {
            FieldName::Rack => Some(&self.rack),
            FieldName::Shelf => Some(&self.shelf),
            FieldName::Cost => Some(&self.cost),
            FieldName::Consume => Some(&self.consume),
            FieldName::Country => None,
        }
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut TextAreaState> {
        match field {
            FieldName::Rack => Some(&mut self.rack),
            FieldName::Shelf => Some(&mut self.shelf),
            FieldName::Cost => Some(&mut self.cost),
            FieldName::Consume => Some(&mut self.consume),
            FieldName::Country => None,
        }
    }

    /// Current inputs as a draft
    pub fn draft(&self) -> FormDraft {
        FormDraft {
            rack: self.rack.content.clone(),
            shelf: self.shelf.content.clone(),
            cost: self.cost.content.clone(),
            country: self.country,
            consume: self.consume.content.clone(),
        }
    }

    /// Parsed consume date, when the input holds a valid one
    pub fn consume_date(&self) -> Option<NaiveDate> {
        form::parse_date(&self.consume.content)
    }

    pub fn set_focus(&mut self, field: FieldName) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_country(&mut self, country: Country) {
        self.country = country;
        self.revalidate();
    }

    pub fn set_consume(&mut self, date: NaiveDate) {
        self.consume = TextAreaState::with_content(date.format(form::DATE_INPUT_FORMAT).to_string());
        self.revalidate();
    }

    /// Moves the consume date by `days`, starting from `today` when the
    /// input does not hold a valid date.
    pub fn shift_consume(&mut self, days: i64, today: NaiveDate) {
        let base = self.consume_date().unwrap_or(today);
        if let Some(date) =
            TimeDelta::try_days(days).and_then(|delta| base.checked_add_signed(delta))
        {
            self.set_consume(date);
        }
    }

    /// Applies key events to the focused text field.
    ///
    /// Line breaks never reach the buffer, and the cost field only takes
    /// digits, `.` and the four editing keys.
    pub fn apply_keys(&mut self, engine: &dyn TextAreaEngine, keys: &[KeyEvent]) {
        let field = self.focus;
        let keys: Vec<KeyEvent> = keys
            .iter()
            .copied()
            .filter(|key| !is_newline_key(key))
            .filter(|key| field != FieldName::Cost || accepts_cost_key(key))
            .collect();
        if keys.is_empty() {
            return;
        }

        if let Some(buffer) = self.text_mut(field) {
            *buffer = engine.apply_keys(buffer, &keys).into_single_line();
        }
        self.revalidate();
    }

    /// Inserts pasted text into the focused text field at the cursor.
    pub fn paste(&mut self, engine: &dyn TextAreaEngine, text: &str) {
        let keys: Vec<KeyEvent> = text
            .chars()
            .filter(|c| !c.is_control())
            .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
            .collect();
        self.apply_keys(engine, &keys);
    }

    /// Validates the whole record.
    ///
    /// On success returns the submission for the completion handler. On
    /// failure keeps the report for inline display and moves focus to the
    /// first failing field.
    pub fn submit(&mut self) -> Option<Submission> {
        match validation::validate(&self.draft()) {
            Ok(values) => {
                self.report = Some(ValidationReport::default());
                Some(Submission::new(self.kind, values))
            }
            Err(report) => {
                if let Some(field) = report.first_invalid() {
                    self.focus = field;
                }
                self.report = Some(report);
                None
            }
        }
    }

    /// After the first submit attempt, edits re-run validation so the
    /// inline messages follow the input.
    fn revalidate(&mut self) {
        if self.report.is_some() {
            self.report = Some(validation::check(&self.draft()));
        }
    }
}

fn is_newline_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn accepts_cost_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) => {
            !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                && cost::accepts_cost_char(c)
        }
        KeyCode::Backspace | KeyCode::Delete | KeyCode::Left | KeyCode::Right => true,
        _ => false,
    }
}
