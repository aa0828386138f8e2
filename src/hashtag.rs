//! Hashtag validation

use regex::Regex;
use once_cell::sync::Lazy;

static HASHTAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#[a-zA-Z0-9_]+$").unwrap()
});

/// Validates hashtags: `#` followed by one or more ASCII letters, digits,
/// or underscores. A bare `#` is not a hashtag.
pub fn is_valid_hashtag(hashtag: &str) -> bool {
    if hashtag.is_empty() {
        return false;
    }
    HASHTAG_REGEX.is_match(hashtag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashtag_validation() {
        assert!(is_valid_hashtag("#example"));
        assert!(is_valid_hashtag("#ThisIsAHashtag"));
        assert!(is_valid_hashtag("#123"));
        assert!(is_valid_hashtag("#_underscore"));

        assert!(!is_valid_hashtag(""));
        assert!(!is_valid_hashtag("example"));
        assert!(!is_valid_hashtag("#"));
        assert!(!is_valid_hashtag("#ThisIsAHashtag!"));
    }

    #[test]
    fn test_hashtag_is_ascii_only() {
        assert!(!is_valid_hashtag("#tag with space"));
        assert!(!is_valid_hashtag("#héllo"));
        assert!(!is_valid_hashtag("#emoji🎉"));
        assert!(!is_valid_hashtag("##double"));
    }
}
