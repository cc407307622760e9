//! Error types for digest, Base64 and URL coding operations.

use thiserror::Error;

/// Errors that can occur while hashing, encoding or decoding.
///
/// The permissive Base64 decoder and every encoder are infallible; these
/// variants only surface where a caller names something by label or hands
/// over input that a strict decoder must reject.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The digest algorithm label is not one of MD5, SHA-1 or SHA-256.
    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The charset label is not one of UTF-8 or ISO-8859-1.
    #[error("Unsupported charset: {0}")]
    UnsupportedCharset(String),

    /// A `%` was not followed by two hexadecimal digits.
    #[error("Malformed percent escape at byte {position}")]
    MalformedEscape {
        /// Byte offset of the offending `%` in the input.
        position: usize,
    },

    /// Strict Base64 decoding rejected the input.
    #[error("Invalid base64 input: {0}")]
    InvalidBase64(String),
}

impl From<base64::DecodeError> for CodecError {
    fn from(err: base64::DecodeError) -> Self {
        CodecError::InvalidBase64(err.to_string())
    }
}
