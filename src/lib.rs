//! Rusty Validators
//!
//! Pattern-based validators for common string formats: phone numbers,
//! credit card numbers, hashtags, currency amounts, emails, times, URLs,
//! and single HTML tags.
//!
//! Each validator is a pure predicate: it takes one `&str`, matches it
//! against a fixed grammar, and returns `bool`. A match must cover the
//! entire input; partial matches are rejected. Empty input is always
//! invalid and no input can panic a validator. Matching cost stays linear
//! in the input length, so adversarial inputs cannot hang a caller.
//!
//! Every validator implements a documented, intentionally simplified
//! subset of the real-world syntax. None of them replaces RFC-grade
//! validation.

pub mod phone;
pub mod card;
pub mod hashtag;
pub mod currency;
pub mod email;
pub mod time;
pub mod url;
pub mod html;

// Re-export all validators
pub use phone::*;
pub use card::*;
pub use hashtag::*;
pub use currency::*;
pub use email::*;
pub use time::*;
pub use url::*;
pub use html::*;
