use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One to three whole digits, optionally followed by exactly two decimals.
    #[allow(clippy::unwrap_used)]
    static ref COST_PATTERN: Regex = Regex::new(r"^[0-9]{1,3}(?:\.[0-9]{2})?$").unwrap();
}

/// Whether `value` is an acceptable cost string ("5", "12.50", "999.99").
pub fn is_valid_cost(value: &str) -> bool {
    COST_PATTERN.is_match(value)
}

/// Converts a cost string into integer minor units (cents).
///
/// Returns `None` for anything [`is_valid_cost`] rejects. The conversion
/// works on the digits directly so "12.50" is exactly 1250.
pub fn to_minor_units(value: &str) -> Option<u32> {
    if !is_valid_cost(value) {
        return None;
    }

    let (whole, fraction) = value.split_once('.').unwrap_or((value, "00"));
    let whole: u32 = whole.parse().ok()?;
    let fraction: u32 = fraction.parse().ok()?;
    Some(whole * 100 + fraction)
}

/// Whether a typed character may enter the cost input at all.
pub fn accepts_cost_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
