//! # rvdump-core
//!
//! Core types for the rvdump disassembler: the decoded-instruction
//! record and its canonical text rendering, the ABI register namer,
//! and the symbol (tag) map used to resolve branch targets.

pub mod error;
pub mod instruction;
pub mod register;
pub mod symbol;

pub use error::DecoderBug;
pub use instruction::Instruction;
pub use register::abi_name;
pub use symbol::SymbolMap;
