//! Message digests rendered as lowercase hex.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::error::CodecError;
use crate::types::Algorithm;

/// Hash `data` with `D` and render the digest as lowercase hex.
fn hex_digest<D: Digest>(data: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Hash a byte sequence and return its lowercase hex digest.
///
/// Output length is fixed per algorithm: 32 for MD5, 40 for SHA-1,
/// 64 for SHA-256. Each byte is two zero-padded hex digits, high nibble
/// first.
///
/// # Examples
///
/// ```
/// use haruue_codec::{digest_hex, Algorithm};
///
/// let hex = digest_hex(Algorithm::Sha1, b"abc");
/// assert_eq!(hex, "a9993e364706816aba3e25717850c26c9cd0d89d");
/// ```
pub fn digest_hex(algorithm: Algorithm, data: &[u8]) -> String {
    match algorithm {
        Algorithm::Md5 => hex_digest::<Md5>(data),
        Algorithm::Sha1 => hex_digest::<Sha1>(data),
        Algorithm::Sha256 => hex_digest::<Sha256>(data),
    }
}

/// Hash a byte sequence with an algorithm named by label.
///
/// Labels are matched case-insensitively (`"SHA-1"`, `"sha1"`, `"MD5"`, ...).
/// An unknown label is reported as [`CodecError::UnsupportedAlgorithm`]
/// rather than an empty string.
pub fn digest_hex_by_name(label: &str, data: &[u8]) -> Result<String, CodecError> {
    let algorithm: Algorithm = label.parse()?;
    Ok(digest_hex(algorithm, data))
}

/// SHA-1 digest as 40 lowercase hex characters.
///
/// # Examples
///
/// ```
/// use haruue_codec::sha1_hex;
///
/// assert_eq!(sha1_hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
/// ```
pub fn sha1_hex(data: &[u8]) -> String {
    digest_hex(Algorithm::Sha1, data)
}

/// MD5 digest as 32 lowercase hex characters.
///
/// # Examples
///
/// ```
/// use haruue_codec::md5_hex;
///
/// assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
pub fn md5_hex(data: &[u8]) -> String {
    digest_hex(Algorithm::Md5, data)
}

/// SHA-256 digest as 64 lowercase hex characters.
pub fn sha256_hex(data: &[u8]) -> String {
    digest_hex(Algorithm::Sha256, data)
}
