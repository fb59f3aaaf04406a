use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::validation::FieldName;

/// Messages for the mounted form (FormState transitions)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormMsg {
    // Focus
    FocusNext,
    FocusPrev,
    Focus(FieldName),

    // Text fields: keys are queued and applied through the textarea engine
    ProcessTextAreaInput(KeyEvent),
    Paste(String),

    // Country select
    CountryNext,
    CountryPrev,
    CountryJump(char),

    // Consume date helpers
    SetConsumeToday,
    ShiftConsume(i64),

    Submit,
}

impl FormMsg {
    pub fn is_frequent(&self) -> bool {
        // conservative: none of these are considered frequent for now
        false
    }
}
