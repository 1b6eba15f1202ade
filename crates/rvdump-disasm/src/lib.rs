//! # rvdump-disasm
//!
//! The RV32IMC instruction decoder: bit-field extraction, immediate
//! reconstruction, the compressed (16-bit) and base (32-bit) decoders,
//! and the sequential `.text` walker.

pub mod base;
pub mod bits;
pub mod compressed;
pub mod decoder;
pub mod error;
pub mod imm;
pub mod walk;

pub use decoder::Decoder;
pub use error::DecodeError;
pub use walk::{is_compressed, TextWalker};
