//! The instruction decoder.
//!
//! `Decoder` borrows the frozen tag map so branch and jump targets can
//! be rendered as symbol names. Decoding is pure: the same word at the
//! same address always produces the same instruction.

use rvdump_core::{abi_name, SymbolMap};

use crate::DecodeError;

/// RV32IMC instruction decoder.
pub struct Decoder<'a> {
    pub(crate) tags: &'a SymbolMap,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over the given tag map.
    pub fn new(tags: &'a SymbolMap) -> Self {
        Self { tags }
    }

    /// Renders integer register `id` by its ABI name.
    pub(crate) fn reg(&self, id: u32) -> Result<String, DecodeError> {
        Ok(abi_name(id)?.to_string())
    }

    /// Renders a compressed 3-bit register (`x8`-`x15`).
    pub(crate) fn creg(&self, id: u32) -> Result<String, DecodeError> {
        self.reg(id + 8)
    }

    /// Resolves a PC-relative displacement to a symbol name or a
    /// signed decimal operand.
    pub(crate) fn target(&self, address: u32, disp: i32) -> String {
        self.tags.resolve(address, disp)
    }
}
