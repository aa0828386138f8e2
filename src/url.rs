//! URL validation

use regex::Regex;
use once_cell::sync::Lazy;

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(?:/[\w.-]+)*$").unwrap()
});

/// Validates http/https URLs with a dotted host and an optional path.
///
/// The host must end in a top-level label of at least two letters, so
/// `https://example` is rejected. Path segments may contain word
/// characters, dots, and hyphens. Query strings, fragments, ports, and
/// percent-encoding are not part of the accepted grammar.
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    URL_REGEX.is_match(url)
}
