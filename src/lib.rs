//! haruue-codec - hex digests, Base64, URL coding and Unicode escapes
//!
//! A small set of pure, thread-safe encoding and hashing helpers.
//!
//! # Features
//!
//! - **Digests**: MD5, SHA-1 and SHA-256 rendered as fixed-length lowercase hex
//! - **Base64**: standard padded encoding and a permissive decoder that skips
//!   junk and stops at padding, plus a strict RFC 4648 decoder
//! - **URL coding**: `application/x-www-form-urlencoded` style, UTF-8 by default
//! - **Unicode escapes**: `\uXXXX` escaping over UTF-16 code units
//! - **Query building**: append encoded fields to a URL prefix
//!
//! # Quick Start
//!
//! ```
//! use haruue_codec::{sha1_hex, md5_hex, base64_encode, base64_decode, url_encode, url_decode};
//!
//! assert_eq!(sha1_hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
//! assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
//!
//! let encoded = base64_encode(b"hello");
//! assert_eq!(encoded, "aGVsbG8=");
//! assert_eq!(base64_decode(&encoded), b"hello");
//!
//! let query = url_encode("a b&c");
//! assert_eq!(query, "a+b%26c");
//! assert_eq!(url_decode(&query)?, "a b&c");
//! # Ok::<(), haruue_codec::CodecError>(())
//! ```
//!
//! # Text Encoding
//!
//! Every text-bearing operation uses UTF-8, except URL coding through a
//! [`UrlCodec`] built for another [`Charset`].
//!
//! # Error Handling
//!
//! Encoders and the permissive Base64 decoder never fail. Everything else
//! returns `Result<T, CodecError>`:
//!
//! - Unknown algorithm or charset labels
//! - Malformed `%` escapes in URL-encoded text
//! - Malformed input to the strict Base64 decoder

// Re-export digest functions
pub use crate::core::{digest_hex, digest_hex_by_name, md5_hex, sha1_hex, sha256_hex};

// Re-export Base64 functions
pub use crate::core::{base64_decode, base64_decode_strict, base64_encode, encoded_len};

// Re-export URL utilities
pub use crate::url::{complete_url, has_query, url_decode, url_encode, UrlCodec};

// Re-export text helpers
pub use text::{ascii_to_native, from_bytes, native_to_ascii, to_bytes};
pub use validate::is_email;

// Re-export public types
pub use error::CodecError;
pub use types::{Algorithm, Charset};

// Module declarations
pub mod error;
pub mod types;
pub mod core;
pub mod url;
pub mod text;
pub mod validate;
