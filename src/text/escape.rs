//! `\uXXXX` escaping of text.
//!
//! Escapes work on UTF-16 code units, so a character outside the Basic
//! Multilingual Plane is written as two escapes (a surrogate pair) and
//! read back as one character.

use std::fmt::Write;

use once_cell::sync::Lazy;
use regex::Regex;

static ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\[Uu]([0-9A-Fa-f]{4})").expect("escape pattern is valid"));

/// Escape every character except ASCII letters and digits as `\uXXXX`.
///
/// Hex digits are lowercase and always four wide.
///
/// # Examples
///
/// ```
/// use haruue_codec::native_to_ascii;
///
/// assert_eq!(native_to_ascii("春上冰月"), "\\u6625\\u4e0a\\u51b0\\u6708");
/// assert_eq!(native_to_ascii("a b"), "a\\u0020b");
/// ```
pub fn native_to_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 6);
    let mut units = [0u16; 2];

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            // writing into a String cannot fail
            let _ = write!(out, "\\u{:04x}", unit);
        }
    }

    out
}

/// Replace every `\uXXXX` (or `\UXXXX`) escape with the character it names.
///
/// Escapes that pair up as UTF-16 surrogates produce a single character; a
/// lone surrogate becomes U+FFFD. Text that is not a complete escape,
/// such as `\u12`, is kept as it is.
///
/// # Examples
///
/// ```
/// use haruue_codec::ascii_to_native;
///
/// assert_eq!(ascii_to_native("\\u6625\\u4E0A!"), "春上!");
/// assert_eq!(ascii_to_native("\\ud83d\\ude00"), "\u{1F600}");
/// assert_eq!(ascii_to_native("\\u12"), "\\u12");
/// ```
pub fn ascii_to_native(text: &str) -> String {
    let mut units: Vec<u16> = Vec::with_capacity(text.len());
    let mut last = 0;

    for caps in ESCAPE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        units.extend(text[last..whole.start()].encode_utf16());
        match u16::from_str_radix(&caps[1], 16) {
            Ok(unit) => units.push(unit),
            Err(_) => units.extend(whole.as_str().encode_utf16()),
        }
        last = whole.end();
    }
    units.extend(text[last..].encode_utf16());

    String::from_utf16_lossy(&units)
}
