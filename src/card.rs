//! Credit card number validation

use regex::Regex;
use once_cell::sync::Lazy;

static CARD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d{4}[- ]?){3}\d{4}$").unwrap()
});

/// Validates 16-digit credit card numbers.
///
/// Accepted formats:
/// - `1234 5678 9012 3456`
/// - `1234-5678-9012-3456`
/// - `1234567890123456`
///
/// The number must consist of exactly four groups of four digits; each of
/// the first three groups may be followed by a single hyphen or space, and
/// the choice is independent per gap. This is a shape check only: it does
/// not verify issuer prefixes or the Luhn checksum.
pub fn is_valid_credit_card(card: &str) -> bool {
    if card.is_empty() {
        return false;
    }
    CARD_REGEX.is_match(card)
}
