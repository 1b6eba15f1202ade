//! Error types for ELF container parsing.

use thiserror::Error;

/// Error type for ELF container parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The identification bytes do not spell `ELF`.
    #[error("not an ELF file: identification bytes {actual:02x?}")]
    NotElf { actual: Vec<u8> },

    /// The file ends before a required structure.
    #[error("file too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    /// A structurally invalid field.
    #[error("invalid {kind} at offset {offset:#x}: {reason}")]
    InvalidStructure {
        kind: &'static str,
        offset: u64,
        reason: String,
    },

    /// A symbol-table field outside the defined enumeration. The
    /// producer is malformed, so this aborts the run.
    #[error("unknown {kind} {value:#x} in symbol table")]
    UnknownSymbolField { kind: &'static str, value: u8 },
}

impl ParseError {
    /// Creates a new NotElf error.
    pub fn not_elf(actual: &[u8]) -> Self {
        Self::NotElf {
            actual: actual.to_vec(),
        }
    }

    /// Creates a new TooShort error.
    pub fn too_short(expected: usize, actual: usize) -> Self {
        Self::TooShort { expected, actual }
    }

    /// Creates a new InvalidStructure error.
    pub fn invalid_structure(kind: &'static str, offset: u64, reason: impl Into<String>) -> Self {
        Self::InvalidStructure {
            kind,
            offset,
            reason: reason.into(),
        }
    }
}
