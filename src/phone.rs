//! Phone number validation

use regex::Regex;
use once_cell::sync::Lazy;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\(\d{3}\)|\d{3})[-.\s]?\d{3}[-.\s]?\d{4}$").unwrap()
});

/// Validates North-American-style phone numbers.
///
/// Accepted formats:
/// - `(123) 456-7890`
/// - `123-456-7890`
/// - `123.456.7890`
/// - `1234567890`
///
/// The area code may be written with or without parentheses, and the two
/// separators (hyphen, dot, or a single whitespace) are each optional, so
/// `(123)456-7890` is valid. An opening parenthesis without its closing
/// one is not.
pub fn is_valid_phone_number(phone: &str) -> bool {
    if phone.is_empty() {
        return false;
    }
    PHONE_REGEX.is_match(phone)
}
