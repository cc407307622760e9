//! Input shape checks.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[ \t\n\x0B\x0C\r]*[A-Za-z0-9_]+(?:\.?[A-Za-z0-9_-]+)*@[a-zA-Z0-9]+(?:[-.][a-zA-Z0-9]+)*\.[a-zA-Z]+[ \t\n\x0B\x0C\r]*$",
    )
    .expect("email pattern is valid")
});

/// Check whether `text` looks like an e-mail address.
///
/// This is a shape check only: a word-character local part (dots allowed
/// between segments), `@`, and a dotted domain ending in letters.
/// Surrounding ASCII whitespace is tolerated.
///
/// # Examples
///
/// ```
/// use haruue_codec::is_email;
///
/// assert!(is_email("haruue@example.com"));
/// assert!(!is_email("haruue@localhost"));
/// ```
pub fn is_email(text: &str) -> bool {
    EMAIL.is_match(text)
}
