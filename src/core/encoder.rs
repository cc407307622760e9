//! Base64 encoding with the standard alphabet and `=` padding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// The 64-character standard alphabet, indexed by 6-bit value.
pub const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const BASE64_PAD: u8 = b'=';

/// Encode bytes as padded Base64 text.
///
/// Every 3 input bytes become 4 characters. A trailing single byte yields
/// two characters plus `==`, a trailing pair three characters plus `=`, so
/// the output is always `4 * ceil(n / 3)` characters long.
///
/// # Examples
///
/// ```
/// use haruue_codec::base64_encode;
///
/// assert_eq!(base64_encode(b"a"), "YQ==");
/// assert_eq!(base64_encode(b"ab"), "YWI=");
/// assert_eq!(base64_encode(b"abc"), "YWJj");
/// ```
pub fn base64_encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Length of the encoded form of `len` input bytes.
pub fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}
