//! Errors that indicate a defect in the decoder itself.

use thiserror::Error;

/// A condition that cannot be produced by any input, only by a bug in
/// the decoder: callers extract register fields as 5-bit values and
/// never build operand lists outside the emitter's shapes.
#[derive(Error, Debug)]
pub enum DecoderBug {
    /// Register index outside `0..32`.
    #[error("decoder bug: register index {0} out of range")]
    RegisterIndex(u32),

    /// Operand list that none of the emitter shapes can format.
    #[error("decoder bug: cannot format an instruction with {0} operands")]
    OperandCount(usize),
}
