//! HTML tag validation

use regex::Regex;
use once_cell::sync::Lazy;

// Self-closing form: <name attr="value" .../>
static SELF_CLOSING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^<[a-zA-Z0-9]+(?:\s[a-zA-Z0-9-]+(?:="[^"]*")?)*/>$"#).unwrap()
});

// Opening form, anchored at the start only; group 1 captures the tag name
// so the closing tag can be checked against it.
static OPENING_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^<([a-zA-Z0-9]+)(?:\s[a-zA-Z0-9-]+(?:="[^"]*")?)*>"#).unwrap()
});

/// Validates a single HTML element: either an opening tag with inner
/// content and a matching closing tag, or a self-closing tag.
///
/// Accepted shapes:
/// - `<p>Hello</p>`
/// - `<div class="example">content</div>`
/// - `<img src="image.jpg" alt="description"/>`
///
/// The tag name is alphanumeric. Each attribute is introduced by a single
/// whitespace and may carry a double-quoted value. The closing tag must
/// repeat the opening tag name exactly (case-sensitive). Inner content may
/// be padded with whitespace on either side but must otherwise stay on one
/// line. This checks a single element, not a document.
pub fn is_valid_html_tag(html: &str) -> bool {
    if html.is_empty() {
        return false;
    }
    if SELF_CLOSING_REGEX.is_match(html) {
        return true;
    }
    // The regex crate doesn't support back-references, so the closing tag
    // is matched in a second phase against the captured opening name.
    let caps = match OPENING_TAG_REGEX.captures(html) {
        Some(caps) => caps,
        None => return false,
    };
    let (opening, name) = match (caps.get(0), caps.get(1)) {
        (Some(opening), Some(name)) => (opening, name.as_str()),
        _ => return false,
    };
    let closing = format!("</{}>", name);
    let inner = match html[opening.end()..].strip_suffix(&closing) {
        Some(inner) => inner,
        None => return false,
    };
    !inner.trim().contains('\n')
}
