//! Instruction decoding error types.

use rvdump_core::DecoderBug;
use thiserror::Error;

/// Error type for instruction decoding.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Recognized opcode group but no sub-case matched. Recoverable:
    /// the driver prints a placeholder line and keeps decoding.
    #[error("unknown encoding at {address:#x}: {bytes:02x?}")]
    UnknownEncoding { address: u32, bytes: Vec<u8> },

    /// `.text` ends in the middle of an instruction.
    #[error("truncated instruction at {address:#x}: need {needed} bytes, have {available}")]
    Truncated {
        address: u32,
        needed: usize,
        available: usize,
    },

    /// A defect in the decoder itself, not in the input.
    #[error(transparent)]
    Bug(#[from] DecoderBug),
}

impl DecodeError {
    /// Creates an UnknownEncoding error for a compressed half-word.
    pub fn unknown16(address: u32, word: u16) -> Self {
        Self::UnknownEncoding {
            address,
            bytes: word.to_le_bytes().to_vec(),
        }
    }

    /// Creates an UnknownEncoding error for a full 32-bit word.
    pub fn unknown32(address: u32, word: u32) -> Self {
        Self::UnknownEncoding {
            address,
            bytes: word.to_le_bytes().to_vec(),
        }
    }

    /// Creates a new Truncated error.
    pub fn truncated(address: u32, needed: usize, available: usize) -> Self {
        Self::Truncated {
            address,
            needed,
            available,
        }
    }

    /// Returns true if the driver may emit a placeholder and continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownEncoding { .. })
    }
}
