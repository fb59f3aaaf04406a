use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// Countries offered by the country select. The set is closed and the
/// declaration order is the order the select cycles through.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
pub enum Country {
    #[default]
    #[strum(serialize = "New Zealand")]
    #[serde(rename = "New Zealand")]
    NewZealand,
    France,
    Spain,
    Italy,
    Australia,
    Germany,
    Greece,
}

impl Country {
    fn position(self) -> usize {
        Self::iter().position(|c| c == self).unwrap_or_default()
    }

    fn nth_wrapping(index: usize) -> Self {
        Self::iter()
            .nth(index % Self::COUNT)
            .unwrap_or_default()
    }

    /// The following country in select order, wrapping to the first
    pub fn next(self) -> Self {
        Self::nth_wrapping(self.position() + 1)
    }

    /// The preceding country in select order, wrapping to the last
    pub fn prev(self) -> Self {
        Self::nth_wrapping(self.position() + Self::COUNT - 1)
    }

    /// Jump to the next country (after `self`) whose name starts with `initial`.
    /// Matching is case-insensitive; returns `self` when nothing matches.
    pub fn next_starting_with(self, initial: char) -> Self {
        let initial = initial.to_ascii_lowercase();
        let start = self.position() + 1;
        (0..Self::COUNT)
            .map(|offset| Self::nth_wrapping(start + offset))
            .find(|c| {
                c.to_string()
                    .chars()
                    .next()
                    .is_some_and(|first| first.to_ascii_lowercase() == initial)
            })
            .unwrap_or(self)
    }
}
