//! # rvdump-formats
//!
//! ELF32 little-endian container parsing: the file header, section
//! headers, symbol tables, and string table, plus construction of the
//! tag map the disassembler labels addresses with.

pub mod elf;
pub mod error;

pub use elf::{Elf32, ElfHeader, SectionHeader, SymbolEntry};
pub use error::ParseError;
