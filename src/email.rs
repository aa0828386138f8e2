//! Email validation

use regex::Regex;
use once_cell::sync::Lazy;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Validates email format: local part, `@`, domain, and a TLD of at least
/// two letters. This is a syntax check only. It does not verify that the
/// domain exists and it does not cover RFC edge cases such as quoted local
/// parts or IP-literal domains.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() {
        return false;
    }
    EMAIL_REGEX.is_match(email)
}
