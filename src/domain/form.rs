use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::{cost, country::Country};

/// Date format used by the consume input
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Long-form date rendering shown beside a parsed consume input
pub const DATE_DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// A validated cellar record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub rack: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default)]
    pub country: Country,
    pub consume: NaiveDate,
}

impl FormValues {
    /// The fixed record the Edit trigger opens the form with
    pub fn example(today: NaiveDate) -> Self {
        Self {
            rack: "Garage".to_owned(),
            shelf: None,
            cost: None,
            country: Country::NewZealand,
            consume: today,
        }
    }

    /// Cost in minor currency units, if a cost was entered
    pub fn cost_cents(&self) -> Option<u32> {
        self.cost.as_deref().and_then(cost::to_minor_units)
    }
}

/// Whether the form was opened empty or pre-filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum FormKind {
    Add,
    Edit,
}

/// What the completion handler receives for a valid submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub kind: FormKind,
    pub values: FormValues,
    pub cost_cents: Option<u32>,
}

impl Submission {
    pub fn new(kind: FormKind, values: FormValues) -> Self {
        let cost_cents = values.cost_cents();
        Self {
            kind,
            values,
            cost_cents,
        }
    }

    /// One-line notification text, e.g. `Add {"rack":"A1",...}`
    pub fn notification(&self) -> String {
        let json = serde_json::to_string(&self.values).unwrap_or_default();
        format!("{} {json}", self.kind)
    }
}

/// Raw field inputs as typed by the user, before validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub rack: String,
    pub shelf: String,
    pub cost: String,
    pub country: Country,
    pub consume: String,
}

impl From<&FormValues> for FormDraft {
    fn from(values: &FormValues) -> Self {
        Self {
            rack: values.rack.clone(),
            shelf: values.shelf.clone().unwrap_or_default(),
            cost: values.cost.clone().unwrap_or_default(),
            country: values.country,
            consume: values.consume.format(DATE_INPUT_FORMAT).to_string(),
        }
    }
}

/// Parses a consume input, tolerating surrounding whitespace.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_INPUT_FORMAT).ok()
}
