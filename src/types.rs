//! Selectors for digest algorithms and text charsets.

use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// Digest algorithm used by [`digest_hex`](crate::digest_hex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// MD5, 128-bit digest
    Md5,
    /// SHA-1, 160-bit digest
    Sha1,
    /// SHA-256, 256-bit digest
    Sha256,
}

impl Algorithm {
    /// Canonical label, as accepted by `FromStr`.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
        }
    }

    /// Length of the raw digest in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
        }
    }

    /// Length of the hex rendering of the digest.
    pub fn hex_len(&self) -> usize {
        self.digest_len() * 2
    }
}

impl FromStr for Algorithm {
    type Err = CodecError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_ascii_uppercase().as_str() {
            "MD5" => Ok(Algorithm::Md5),
            "SHA-1" | "SHA1" => Ok(Algorithm::Sha1),
            "SHA-256" | "SHA256" => Ok(Algorithm::Sha256),
            _ => {
                tracing::debug!(label, "unsupported digest algorithm");
                Err(CodecError::UnsupportedAlgorithm(label.to_string()))
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text charset for URL coding.
///
/// Everything else in the crate is fixed to UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Charset {
    /// UTF-8, the default
    #[default]
    Utf8,
    /// ISO-8859-1, one byte per character up to U+00FF
    Latin1,
}

impl Charset {
    /// Canonical label, as accepted by `FromStr`.
    pub fn label(&self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Latin1 => "ISO-8859-1",
        }
    }

    /// Encode text into bytes of this charset.
    ///
    /// Latin-1 cannot represent characters above U+00FF; those become `?`.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Charset::Utf8 => text.as_bytes().to_vec(),
            Charset::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
        }
    }

    /// Decode bytes of this charset into text.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD; every byte is valid Latin-1.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Charset::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Charset::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }
}

impl FromStr for Charset {
    type Err = CodecError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_ascii_uppercase().as_str() {
            "UTF-8" | "UTF8" => Ok(Charset::Utf8),
            "ISO-8859-1" | "LATIN1" | "LATIN-1" => Ok(Charset::Latin1),
            _ => {
                tracing::debug!(label, "unsupported charset");
                Err(CodecError::UnsupportedCharset(label.to_string()))
            }
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
