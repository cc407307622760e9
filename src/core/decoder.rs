//! Base64 decoding.
//!
//! The default decoder is permissive: characters outside the alphabet are
//! skipped, and decoding stops at the first `=` in the third or fourth slot
//! of a group, or at the end of input, returning whatever has been decoded
//! so far. Input need not be a multiple of four characters and nothing is
//! ever rejected. Existing producers rely on this, so it must not be
//! tightened; [`base64_decode_strict`] is there for callers that want
//! RFC 4648 validation instead.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::core::encoder::{BASE64_ALPHABET, BASE64_PAD};
use crate::error::CodecError;

const INVALID: u8 = 0xFF;

/// Inverse of [`BASE64_ALPHABET`]; `INVALID` for bytes outside it.
const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < BASE64_ALPHABET.len() {
        table[BASE64_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Outcome of looking for the next significant character.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Value(u8),
    Padding,
    End,
}

struct PermissiveDecoder<'a> {
    input: &'a [u8],
    pos: usize,
    skipped: usize,
}

impl<'a> PermissiveDecoder<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0, skipped: 0 }
    }

    /// Advance to the next alphabet character.
    ///
    /// `=` only counts as padding when `padding_allowed`; otherwise it is
    /// skipped like any other non-alphabet byte.
    fn next_slot(&mut self, padding_allowed: bool) -> Slot {
        while let Some(&byte) = self.input.get(self.pos) {
            self.pos += 1;
            if padding_allowed && byte == BASE64_PAD {
                return Slot::Padding;
            }
            match DECODE_TABLE[byte as usize] {
                INVALID => self.skipped += 1,
                value => return Slot::Value(value),
            }
        }
        Slot::End
    }

    fn run(mut self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.input.len() / 4 * 3 + 2);

        loop {
            let Slot::Value(b1) = self.next_slot(false) else { break };
            let Slot::Value(b2) = self.next_slot(false) else { break };
            out.push((b1 << 2) | ((b2 & 0x30) >> 4));

            let b3 = match self.next_slot(true) {
                Slot::Value(v) => v,
                Slot::Padding => {
                    tracing::trace!(at = self.pos - 1, "base64 padding reached");
                    break;
                }
                Slot::End => break,
            };
            out.push(((b2 & 0x0F) << 4) | ((b3 & 0x3C) >> 2));

            let b4 = match self.next_slot(true) {
                Slot::Value(v) => v,
                Slot::Padding => {
                    tracing::trace!(at = self.pos - 1, "base64 padding reached");
                    break;
                }
                Slot::End => break,
            };
            out.push(((b3 & 0x03) << 6) | b4);
        }

        if self.skipped > 0 {
            tracing::debug!(
                skipped = self.skipped,
                "skipped non-alphabet characters in base64 input"
            );
        }
        let rest = &self.input[self.pos..];
        if rest.iter().any(|&b| DECODE_TABLE[b as usize] != INVALID) {
            tracing::debug!(
                consumed = self.pos,
                total = self.input.len(),
                "base64 input truncated at padding"
            );
        }
        out
    }
}

/// Decode Base64 text permissively.
///
/// Non-alphabet characters (whitespace, line breaks, non-ASCII, a stray `=`
/// at the start of a group) are skipped. A `=` in the third or fourth slot
/// of a group ends decoding; so does running out of input. Never fails.
///
/// # Examples
///
/// ```
/// use haruue_codec::base64_decode;
///
/// assert_eq!(base64_decode("YQ=="), b"a");
/// assert_eq!(base64_decode("YQ"), b"a");
/// assert_eq!(base64_decode("YW\nJj"), b"abc");
/// assert_eq!(base64_decode("YQ==YWJj"), b"a");
/// ```
pub fn base64_decode(text: &str) -> Vec<u8> {
    PermissiveDecoder::new(text.as_bytes()).run()
}

/// Decode padded standard-alphabet Base64, rejecting anything malformed.
///
/// # Examples
///
/// ```
/// use haruue_codec::{base64_decode_strict, CodecError};
///
/// assert_eq!(base64_decode_strict("YQ==").unwrap(), b"a");
/// assert!(matches!(base64_decode_strict("YQ"), Err(CodecError::InvalidBase64(_))));
/// ```
pub fn base64_decode_strict(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(STANDARD.decode(text)?)
}
