//! Whole-record validation
//!
//! Validation runs over the complete [`FormDraft`] at once and produces a
//! [`ValidationReport`] with one [`FieldOutcome`] per field. A report with no
//! invalid outcome converts into [`FormValues`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};
use thiserror::Error;

use crate::domain::{
    cost,
    form::{self, FormDraft, FormValues},
};

pub const RACK_REQUIRED: &str = "Rack cannot be empty";
pub const COST_FORMAT: &str = "Cost must be in the format $$$.cc";
pub const CONSUME_REQUIRED: &str = "A consume date is required.";
pub const CONSUME_FORMAT: &str = "Consume must be a date in the format YYYY-MM-DD";

/// Fields of the form, in focus order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
pub enum FieldName {
    #[default]
    Rack,
    Shelf,
    Cost,
    Country,
    Consume,
}

impl FieldName {
    fn position(self) -> usize {
        Self::iter().position(|f| f == self).unwrap_or_default()
    }

    fn nth_wrapping(index: usize) -> Self {
        Self::iter().nth(index % Self::COUNT).unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::nth_wrapping(self.position() + 1)
    }

    pub fn prev(self) -> Self {
        Self::nth_wrapping(self.position() + Self::COUNT - 1)
    }

    /// Whether the field is edited as free text
    pub fn is_text(self) -> bool {
        !matches!(self, FieldName::Country)
    }
}

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldOutcome {
    #[default]
    Valid,
    Invalid(String),
}

impl FieldOutcome {
    fn invalid(message: &str) -> Self {
        FieldOutcome::Invalid(message.to_owned())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, FieldOutcome::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldOutcome::Valid => None,
            FieldOutcome::Invalid(message) => Some(message),
        }
    }
}

/// A field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: FieldName,
    pub message: String,
}

/// Per-field outcomes for one validation pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub rack: FieldOutcome,
    pub shelf: FieldOutcome,
    pub cost: FieldOutcome,
    pub country: FieldOutcome,
    pub consume: FieldOutcome,
}

impl ValidationReport {
    pub fn outcome(&self, field: FieldName) -> &FieldOutcome {
        match field {
            FieldName::Rack => &self.rack,
            FieldName::Shelf => &self.shelf,
            FieldName::Cost => &self.cost,
            FieldName::Country => &self.country,
            FieldName::Consume => &self.consume,
        }
    }

    pub fn message_for(&self, field: FieldName) -> Option<&str> {
        self.outcome(field).message()
    }

    pub fn is_valid(&self) -> bool {
        FieldName::iter().all(|field| self.outcome(field).is_valid())
    }

    /// Failing fields in focus order
    pub fn errors(&self) -> Vec<FieldError> {
        FieldName::iter()
            .filter_map(|field| {
                self.message_for(field).map(|message| FieldError {
                    field,
                    message: message.to_owned(),
                })
            })
            .collect()
    }

    /// First failing field in focus order, if any
    pub fn first_invalid(&self) -> Option<FieldName> {
        FieldName::iter().find(|field| !self.outcome(*field).is_valid())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

fn check_rack(rack: &str) -> FieldOutcome {
    if rack.is_empty() {
        FieldOutcome::invalid(RACK_REQUIRED)
    } else {
        FieldOutcome::Valid
    }
}

fn check_cost(value: &str) -> FieldOutcome {
    // An empty input means "not entered"; only a present value must match.
    if value.is_empty() || cost::is_valid_cost(value) {
        FieldOutcome::Valid
    } else {
        FieldOutcome::invalid(COST_FORMAT)
    }
}

fn check_consume(value: &str) -> FieldOutcome {
    if value.trim().is_empty() {
        FieldOutcome::invalid(CONSUME_REQUIRED)
    } else if form::parse_date(value).is_none() {
        FieldOutcome::invalid(CONSUME_FORMAT)
    } else {
        FieldOutcome::Valid
    }
}

/// Validates every field of `draft`.
pub fn check(draft: &FormDraft) -> ValidationReport {
    ValidationReport {
        rack: check_rack(&draft.rack),
        shelf: FieldOutcome::Valid,
        cost: check_cost(&draft.cost),
        country: FieldOutcome::Valid,
        consume: check_consume(&draft.consume),
    }
}

/// Validates `draft` and builds the record when every field passes.
pub fn validate(draft: &FormDraft) -> Result<FormValues, ValidationReport> {
    let report = check(draft);
    if !report.is_valid() {
        return Err(report);
    }

    let Some(consume) = form::parse_date(&draft.consume) else {
        return Err(report);
    };

    Ok(FormValues {
        rack: draft.rack.clone(),
        shelf: non_empty(&draft.shelf),
        cost: non_empty(&draft.cost),
        country: draft.country,
        consume,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::country::Country;

    fn valid_draft() -> FormDraft {
        FormDraft {
            rack: "A1".into(),
            consume: "2024-06-01".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_rack_is_rejected() {
        let draft = FormDraft {
            rack: String::new(),
            ..valid_draft()
        };
        let report = validate(&draft).expect_err("empty rack must fail");
        assert_eq!(report.message_for(FieldName::Rack), Some(RACK_REQUIRED));
        assert_eq!(report.first_invalid(), Some(FieldName::Rack));
    }

    #[test]
    fn test_whitespace_rack_is_accepted_as_typed() {
        let draft = FormDraft {
            rack: "   ".into(),
            ..valid_draft()
        };
        assert!(check(&draft).rack.is_valid());
        let values = validate(&draft).expect("a rack of spaces is non-empty");
        assert_eq!(values.rack, "   ");
    }

    #[test]
    fn test_absent_cost_is_valid_but_malformed_is_not() {
        let absent = valid_draft();
        assert!(check(&absent).cost.is_valid());

        let malformed = FormDraft {
            cost: "1.5".into(),
            ..valid_draft()
        };
        assert_eq!(
            check(&malformed).message_for(FieldName::Cost),
            Some(COST_FORMAT)
        );
    }

    #[test]
    fn test_consume_required_and_format() {
        let missing = FormDraft {
            consume: String::new(),
            ..valid_draft()
        };
        assert_eq!(
            check(&missing).message_for(FieldName::Consume),
            Some(CONSUME_REQUIRED)
        );

        let garbage = FormDraft {
            consume: "next tuesday".into(),
            ..valid_draft()
        };
        assert_eq!(
            check(&garbage).message_for(FieldName::Consume),
            Some(CONSUME_FORMAT)
        );
    }

    #[test]
    fn test_all_errors_reported_together() {
        let draft = FormDraft {
            rack: String::new(),
            cost: "1234".into(),
            consume: String::new(),
            ..Default::default()
        };
        let report = check(&draft);
        let fields: Vec<FieldName> = report.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![FieldName::Rack, FieldName::Cost, FieldName::Consume]
        );
        assert_eq!(
            report.errors()[0].to_string(),
            "Rack: Rack cannot be empty"
        );
    }

    #[test]
    fn test_valid_draft_builds_values() -> color_eyre::Result<()> {
        let draft = FormDraft {
            shelf: "Top".into(),
            cost: "12.50".into(),
            country: Country::Italy,
            ..valid_draft()
        };
        let values = validate(&draft).map_err(|r| color_eyre::eyre::eyre!("{r:?}"))?;
        assert_eq!(
            values,
            FormValues {
                rack: "A1".into(),
                shelf: Some("Top".into()),
                cost: Some("12.50".into()),
                country: Country::Italy,
                consume: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default(),
            }
        );
        assert_eq!(values.cost_cents(), Some(1250));
        Ok(())
    }

    #[test]
    fn test_validation_is_idempotent() {
        let draft = FormDraft {
            cost: "abc".into(),
            ..valid_draft()
        };
        assert_eq!(validate(&draft), validate(&draft));
        let ok = valid_draft();
        assert_eq!(validate(&ok), validate(&ok));
    }

    #[test]
    fn test_focus_order_wraps() {
        assert_eq!(FieldName::Rack.next(), FieldName::Shelf);
        assert_eq!(FieldName::Consume.next(), FieldName::Rack);
        assert_eq!(FieldName::Rack.prev(), FieldName::Consume);
        assert!(!FieldName::Country.is_text());
        assert!(FieldName::Consume.is_text());
    }
}
