//! URL encoding utilities.
//!
//! This module contains URL-related functionality:
//! - Form-style percent encoding and decoding over a chosen charset
//! - Building a URL from a prefix and query fields

pub mod codec;
pub mod utils;

// Re-export main functionality
pub use codec::{url_decode, url_encode, UrlCodec};
pub use utils::{complete_url, has_query};
