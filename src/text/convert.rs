//! Conversion between text and bytes.
//!
//! Text-bearing operations in this crate always use UTF-8; these two
//! functions are the one place that choice is made.

use crate::types::Charset;

/// UTF-8 bytes of `text`.
pub fn to_bytes(text: &str) -> Vec<u8> {
    Charset::Utf8.encode(text)
}

/// Text from UTF-8 bytes, with invalid sequences replaced by U+FFFD.
///
/// # Examples
///
/// ```
/// use haruue_codec::{from_bytes, to_bytes};
///
/// assert_eq!(from_bytes(&to_bytes("春上")), "春上");
/// assert_eq!(from_bytes(&[0x61, 0xFF]), "a\u{FFFD}");
/// ```
pub fn from_bytes(bytes: &[u8]) -> String {
    Charset::Utf8.decode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bytes_is_utf8() {
        assert_eq!(to_bytes("a"), vec![0x61]);
        assert_eq!(to_bytes("春"), vec![0xE6, 0x98, 0xA5]);
        assert!(to_bytes("").is_empty());
    }

    #[test]
    fn test_truncated_sequence_is_replaced() {
        assert_eq!(from_bytes(&[0xE6, 0x98]), "\u{FFFD}");
    }
}
