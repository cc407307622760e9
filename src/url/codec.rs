//! Form-style URL encoding and decoding.
//!
//! Encoding follows `application/x-www-form-urlencoded`: ASCII letters,
//! digits and `.-*_` are kept, a space becomes `+`, and every other byte of
//! the charset-encoded text becomes an uppercase `%XX` escape. Decoding
//! reverses that, turning each run of consecutive escapes back into text
//! through the same charset.

use percent_encoding::percent_decode_str;
use url::form_urlencoded::byte_serialize;

use crate::error::CodecError;
use crate::types::Charset;

/// URL encoder/decoder bound to a charset.
///
/// The default codec uses UTF-8, which is what [`url_encode`] and
/// [`url_decode`] use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlCodec {
    charset: Charset,
}

impl UrlCodec {
    /// Create a codec for the given charset.
    pub fn new(charset: Charset) -> Self {
        Self { charset }
    }

    /// Create a codec from a charset label such as `"UTF-8"` or `"ISO-8859-1"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use haruue_codec::{Charset, CodecError, UrlCodec};
    ///
    /// assert_eq!(UrlCodec::from_label("utf-8").unwrap().charset(), Charset::Utf8);
    /// assert!(matches!(UrlCodec::from_label("GBK"), Err(CodecError::UnsupportedCharset(_))));
    /// ```
    pub fn from_label(label: &str) -> Result<Self, CodecError> {
        Ok(Self::new(label.parse()?))
    }

    /// Charset used to turn text into bytes before escaping, and back.
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Percent-encode text. Never fails.
    pub fn encode(&self, text: &str) -> String {
        byte_serialize(&self.charset.encode(text)).collect()
    }

    /// Decode percent-encoded text.
    ///
    /// `+` becomes a space and each run of `%XX` escapes is decoded through
    /// the charset, with invalid UTF-8 replaced by U+FFFD. Other characters
    /// are copied as-is. A `%` that is not followed by two hex digits is a
    /// [`CodecError::MalformedEscape`].
    pub fn decode(&self, text: &str) -> Result<String, CodecError> {
        let bytes = text.as_bytes();
        let mut out = String::with_capacity(text.len());
        let mut literal_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'+' => {
                    out.push_str(&text[literal_start..i]);
                    out.push(' ');
                    i += 1;
                    literal_start = i;
                }
                b'%' => {
                    out.push_str(&text[literal_start..i]);
                    let run_start = i;
                    while bytes.get(i) == Some(&b'%') {
                        if !is_hex_pair(bytes.get(i + 1..i + 3)) {
                            tracing::debug!(position = i, "malformed percent escape");
                            return Err(CodecError::MalformedEscape { position: i });
                        }
                        i += 3;
                    }
                    let decoded: Vec<u8> = percent_decode_str(&text[run_start..i]).collect();
                    out.push_str(&self.charset.decode(&decoded));
                    literal_start = i;
                }
                _ => i += 1,
            }
        }
        out.push_str(&text[literal_start..]);

        Ok(out)
    }
}

fn is_hex_pair(pair: Option<&[u8]>) -> bool {
    pair.is_some_and(|digits| digits.iter().all(u8::is_ascii_hexdigit))
}

/// URL-encode UTF-8 text.
///
/// # Examples
///
/// ```
/// use haruue_codec::url_encode;
///
/// assert_eq!(url_encode("a b&c=d"), "a+b%26c%3Dd");
/// assert_eq!(url_encode("春"), "%E6%98%A5");
/// assert_eq!(url_encode("-_.*~"), "-_.*%7E");
/// ```
pub fn url_encode(text: &str) -> String {
    UrlCodec::default().encode(text)
}

/// URL-decode into UTF-8 text.
///
/// # Examples
///
/// ```
/// use haruue_codec::url_decode;
///
/// assert_eq!(url_decode("a+b%26c%3Dd").unwrap(), "a b&c=d");
/// assert_eq!(url_decode("%E6%98%A5").unwrap(), "春");
/// assert!(url_decode("100%").is_err());
/// ```
pub fn url_decode(text: &str) -> Result<String, CodecError> {
    UrlCodec::default().decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_kept_characters() {
        let kept = "ABCXYZabcxyz0189.-*_";
        assert_eq!(url_encode(kept), kept);
    }

    #[test]
    fn test_encode_reserved_characters() {
        assert_eq!(url_encode(" "), "+");
        assert_eq!(url_encode("+"), "%2B");
        assert_eq!(url_encode("%"), "%25");
        assert_eq!(url_encode("/?#[]@!$&'(),;="), "%2F%3F%23%5B%5D%40%21%24%26%27%28%29%2C%3B%3D");
        assert_eq!(url_encode("~"), "%7E");
    }

    #[test]
    fn test_decode_plus_and_escapes() {
        assert_eq!(url_decode("a+b").unwrap(), "a b");
        assert_eq!(url_decode("a%2Bb").unwrap(), "a+b");
        assert_eq!(url_decode("%e6%98%a5").unwrap(), "春");
        assert_eq!(url_decode("plain").unwrap(), "plain");
        assert_eq!(url_decode("").unwrap(), "");
    }

    #[test]
    fn test_decode_passes_unescaped_non_ascii() {
        assert_eq!(url_decode("春+%E4%B8%8A").unwrap(), "春 上");
    }

    #[test]
    fn test_decode_invalid_utf8_is_replaced() {
        assert_eq!(url_decode("a%FFb").unwrap(), "a\u{FFFD}b");
    }

    #[test]
    fn test_malformed_escapes() {
        assert_eq!(url_decode("%"), Err(CodecError::MalformedEscape { position: 0 }));
        assert_eq!(url_decode("ab%4"), Err(CodecError::MalformedEscape { position: 2 }));
        assert_eq!(url_decode("%41%G1"), Err(CodecError::MalformedEscape { position: 3 }));
        assert_eq!(url_decode("%-1"), Err(CodecError::MalformedEscape { position: 0 }));
    }

    #[test]
    fn test_latin1_codec() {
        let codec = UrlCodec::new(Charset::Latin1);
        assert_eq!(codec.encode("é"), "%E9");
        assert_eq!(codec.encode("€"), "%3F");
        assert_eq!(codec.decode("%E9t%E9").unwrap(), "été");
        assert_eq!(codec.decode("春").unwrap(), "春");
    }

    #[test]
    fn test_codec_reports_its_charset() {
        assert_eq!(UrlCodec::default().charset(), Charset::Utf8);
        assert_eq!(UrlCodec::new(Charset::Latin1).charset(), Charset::Latin1);
    }

    #[test]
    fn test_round_trip() {
        for text in ["", "hello world", "k=v&x=y", "春上冰月", "emoji \u{1F600}", "100% +1"] {
            assert_eq!(url_decode(&url_encode(text)).unwrap(), text);
        }
    }
}
