//! Core digest and Base64 functionality.
//!
//! This module contains the byte-level codecs:
//! - Hex-rendered message digests (MD5, SHA-1, SHA-256)
//! - Base64 encoding
//! - Permissive and strict Base64 decoding

pub mod encoder;
pub mod decoder;
pub mod hasher;

// Re-export main functionality
pub use encoder::{base64_encode, encoded_len, BASE64_ALPHABET};
pub use decoder::{base64_decode, base64_decode_strict};
pub use hasher::{digest_hex, digest_hex_by_name, md5_hex, sha1_hex, sha256_hex};
