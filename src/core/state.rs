use chrono::NaiveDate;

use crate::{domain::form::FormKind, infrastructure::config::Config};

pub mod form;
pub mod system;
pub mod textarea;

use form::FormState;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub mode: Mode,
    pub system: SystemState,
    pub config: ConfigState,
    /// Date the session started; seeds the Edit example and the "today" helper
    pub today: NaiveDate,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

/// Which form, if any, is mounted. The variants are mutually exclusive so
/// at most one form exists at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Mode {
    #[default]
    None,
    Add(FormState),
    Edit(FormState),
}

impl Mode {
    pub fn kind(&self) -> Option<FormKind> {
        match self {
            Mode::None => None,
            Mode::Add(_) => Some(FormKind::Add),
            Mode::Edit(_) => Some(FormKind::Edit),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Mode::None)
    }

    pub fn form(&self) -> Option<&FormState> {
        match self {
            Mode::None => None,
            Mode::Add(form) | Mode::Edit(form) => Some(form),
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match self {
            Mode::None => None,
            Mode::Add(form) | Mode::Edit(form) => Some(form),
        }
    }
}

impl AppState {
    /// Initialize AppState for a session starting on `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            ..Default::default()
        }
    }

    /// Initialize AppState with the session date and config
    pub fn new_with_config(today: NaiveDate, config: Config) -> Self {
        Self {
            today,
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// The mounted form, if any
    pub fn form(&self) -> Option<&FormState> {
        self.mode.form()
    }
}
