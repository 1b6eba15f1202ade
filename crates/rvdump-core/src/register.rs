//! RISC-V ABI register names.

use crate::DecoderBug;

/// Returns the ABI name for integer register `id` per the RISC-V
/// calling convention.
///
/// Callers obtain `id` from 5-bit (or offset 3-bit) field extractions,
/// so an index of 32 or more means the decoder itself is broken.
pub fn abi_name(id: u32) -> Result<&'static str, DecoderBug> {
    match id {
        0 => Ok("zero"),
        1 => Ok("ra"),
        2 => Ok("sp"),
        3 => Ok("gp"),
        4 => Ok("tp"),
        5 => Ok("t0"),
        6 => Ok("t1"),
        7 => Ok("t2"),
        8 => Ok("s0"),
        9 => Ok("s1"),
        10 => Ok("a0"),
        11 => Ok("a1"),
        12 => Ok("a2"),
        13 => Ok("a3"),
        14 => Ok("a4"),
        15 => Ok("a5"),
        16 => Ok("a6"),
        17 => Ok("a7"),
        18 => Ok("s2"),
        19 => Ok("s3"),
        20 => Ok("s4"),
        21 => Ok("s5"),
        22 => Ok("s6"),
        23 => Ok("s7"),
        24 => Ok("s8"),
        25 => Ok("s9"),
        26 => Ok("s10"),
        27 => Ok("s11"),
        28 => Ok("t3"),
        29 => Ok("t4"),
        30 => Ok("t5"),
        31 => Ok("t6"),
        other => Err(DecoderBug::RegisterIndex(other)),
    }
}
