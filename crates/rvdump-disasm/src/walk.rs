//! Sequential walk over a `.text` image.
//!
//! The walker owns the only cursor: it fetches a half-word, widens it
//! to a full word when the low two bits are `11`, hands the word to the
//! decoder, and advances by exactly the consumed size. Unknown
//! encodings still advance, so one bad instruction costs one slot.

use rvdump_core::{Instruction, SymbolMap};

use crate::decoder::Decoder;
use crate::DecodeError;

/// Returns true if a half-word starting with these bits is a complete
/// compressed instruction rather than the low half of a 32-bit one.
pub fn is_compressed(half: u16) -> bool {
    half & 0b11 != 0b11
}

/// Iterator over the instruction slots of a `.text` image.
///
/// Yields `(address, decode result)` per slot, where the address is the
/// offset within the image. After a `Truncated` error the walker is
/// exhausted; after an `UnknownEncoding` it continues with the next
/// slot.
pub struct TextWalker<'a> {
    text: &'a [u8],
    decoder: Decoder<'a>,
    offset: usize,
    done: bool,
}

impl<'a> TextWalker<'a> {
    /// Creates a walker over `text` labeling targets from `tags`.
    pub fn new(text: &'a [u8], tags: &'a SymbolMap) -> Self {
        Self {
            text,
            decoder: Decoder::new(tags),
            offset: 0,
            done: false,
        }
    }

    fn halfword(&self, at: usize) -> Option<u16> {
        let bytes = self.text.get(at..at + 2)?;
        Some(u16::from_le_bytes([bytes[0], bytes[1]]))
    }
}

impl Iterator for TextWalker<'_> {
    type Item = (u32, Result<Instruction, DecodeError>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.text.len() {
            return None;
        }

        let address = self.offset as u32;
        let available = self.text.len() - self.offset;

        let Some(low) = self.halfword(self.offset) else {
            self.done = true;
            return Some((address, Err(DecodeError::truncated(address, 2, available))));
        };

        if is_compressed(low) {
            self.offset += 2;
            return Some((address, self.decoder.decode_compressed(low, address)));
        }

        let Some(high) = self.halfword(self.offset + 2) else {
            self.done = true;
            return Some((address, Err(DecodeError::truncated(address, 4, available))));
        };

        let word = (high as u32) << 16 | low as u32;
        self.offset += 4;
        Some((address, self.decoder.decode_word(word, address)))
    }
}
