//! Currency amount validation

use regex::Regex;
use once_cell::sync::Lazy;

static CURRENCY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$(?:\d{1,3}(?:,\d{3})*|\d+)(?:\.\d{2})?$").unwrap()
});

/// Validates dollar amounts.
///
/// Accepted formats:
/// - `$19.99`
/// - `$1,234.56`
/// - `$100`
/// - `$1000` (thousands separators may be omitted entirely)
///
/// When commas are used they must group the integer part in standard
/// threes, so `$19,99` is rejected. Cents, if present, are exactly two
/// digits.
///
/// # Examples
/// ```
/// use rusty_validators::is_valid_currency_amount;
/// assert!(is_valid_currency_amount("$1,234.56"));
/// assert!(!is_valid_currency_amount("$19.999"));
/// ```
pub fn is_valid_currency_amount(amount: &str) -> bool {
    if amount.is_empty() {
        return false;
    }
    CURRENCY_REGEX.is_match(amount)
}
