//! Time-of-day validation

use regex::Regex;
use once_cell::sync::Lazy;

// 24-hour clock: 00:00 through 23:59, both fields two digits.
static TIME_24H_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[01]\d|2[0-3]):[0-5]\d$").unwrap()
});

// 12-hour clock: hour 1-12 with optional leading zero, then a single
// whitespace and an uppercase AM/PM marker.
static TIME_12H_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:0?[1-9]|1[0-2]):[0-5]\d\s(?:AM|PM)$").unwrap()
});

/// Validates times of day in 24-hour (`14:30`) or 12-hour (`2:30 PM`)
/// form. The 24-hour form is tried first; matching either is enough. The
/// 12-hour form requires the separator before the marker and rejects
/// lowercase `am`/`pm`.
pub fn is_valid_time(time: &str) -> bool {
    if time.is_empty() {
        return false;
    }
    TIME_24H_REGEX.is_match(time) || TIME_12H_REGEX.is_match(time)
}
