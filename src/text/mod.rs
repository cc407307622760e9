//! Text helpers: UTF-8 conversion and `\uXXXX` escapes.

pub mod convert;
pub mod escape;

pub use convert::{from_bytes, to_bytes};
pub use escape::{ascii_to_native, native_to_ascii};
