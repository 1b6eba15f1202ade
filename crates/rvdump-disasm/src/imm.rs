//! Immediate reconstruction.
//!
//! RISC-V scatters immediate bits across the instruction word, and the
//! compressed formats each scatter them differently. Every format is
//! described here as a constant table of contiguous source-bit runs and
//! the destination position each run lands at; reconstruction is a fold
//! over the table. The tables are the contract — the tests pin them to
//! reference encodings.

use crate::bits;

/// One contiguous run of immediate bits: instruction bits `[hi:lo]`
/// placed at destination bit `at` and upward.
struct Run {
    hi: u32,
    lo: u32,
    at: u32,
}

const fn run(hi: u32, lo: u32, at: u32) -> Run {
    Run { hi, lo, at }
}

fn scatter(word: u32, runs: &[Run]) -> u32 {
    runs.iter()
        .fold(0, |imm, r| imm | (bits::unsigned(word, r.lo, r.hi) << r.at))
}

// ---------------------------------------------------------------------
// Base (32-bit) formats
// ---------------------------------------------------------------------

/// I-format: bits `[31:20]`, sign bit 11.
pub fn imm_i(word: u32) -> i32 {
    bits::signed(word, 20, 31)
}

const S_FORMAT: &[Run] = &[run(31, 25, 5), run(11, 7, 0)];

/// S-format (stores), sign bit 11.
pub fn imm_s(word: u32) -> i32 {
    bits::signed(scatter(word, S_FORMAT), 0, 11)
}

const B_FORMAT: &[Run] = &[run(31, 31, 12), run(30, 25, 5), run(11, 8, 1), run(7, 7, 11)];

/// B-format (branches), sign bit 12.
pub fn imm_b(word: u32) -> i32 {
    bits::signed(scatter(word, B_FORMAT), 0, 12)
}

/// U-format: bits `[31:12]` pre-shifted into place, sign bit 31.
pub fn imm_u(word: u32) -> i32 {
    bits::signed(bits::unsigned(word, 12, 31) << 12, 0, 31)
}

const J_FORMAT: &[Run] = &[
    run(31, 31, 20),
    run(30, 21, 1),
    run(20, 20, 11),
    run(19, 12, 12),
];

/// J-format (`jal`), sign bit 20.
pub fn imm_j(word: u32) -> i32 {
    bits::signed(scatter(word, J_FORMAT), 0, 20)
}

// ---------------------------------------------------------------------
// Compressed formats
// ---------------------------------------------------------------------

const CI_FORMAT: &[Run] = &[run(12, 12, 5), run(6, 2, 0)];

/// CI-format 6-bit immediate (`c.addi`, `c.li`, `c.andi`), sign bit 5.
pub fn ci_imm(word: u16) -> i32 {
    bits::signed(scatter(word.into(), CI_FORMAT), 0, 5)
}

/// CI-format 6-bit shift amount (`c.slli`, `c.srli`, `c.srai`).
pub fn ci_shamt(word: u16) -> u32 {
    scatter(word.into(), CI_FORMAT)
}

const C_LUI: &[Run] = &[run(12, 12, 17), run(6, 2, 12)];

/// `c.lui` 18-bit immediate, sign bit 17.
pub fn c_lui_imm(word: u16) -> i32 {
    bits::signed(scatter(word.into(), C_LUI), 0, 17)
}

const C_ADDI16SP: &[Run] = &[
    run(12, 12, 9),
    run(6, 6, 4),
    run(5, 5, 6),
    run(4, 3, 7),
    run(2, 2, 5),
];

/// `c.addi16sp` 10-bit immediate (multiple of 16), sign bit 9.
pub fn c_addi16sp_imm(word: u16) -> i32 {
    bits::signed(scatter(word.into(), C_ADDI16SP), 0, 9)
}

const C_ADDI4SPN: &[Run] = &[run(12, 11, 4), run(10, 7, 6), run(6, 6, 2), run(5, 5, 3)];

/// `c.addi4spn` 10-bit zero-extended immediate (multiple of 4).
pub fn c_addi4spn_imm(word: u16) -> u32 {
    scatter(word.into(), C_ADDI4SPN)
}

const CL_WORD: &[Run] = &[run(12, 10, 3), run(6, 6, 2), run(5, 5, 6)];

/// Word-sized CL/CS offset (`c.lw`, `c.flw`, `c.sw`, `c.fsw`).
pub fn cl_word_off(word: u16) -> u32 {
    scatter(word.into(), CL_WORD)
}

const CL_DOUBLE: &[Run] = &[run(12, 10, 3), run(6, 5, 6)];

/// Double-sized CL/CS offset (`c.fld`, `c.fsd`).
pub fn cl_double_off(word: u16) -> u32 {
    scatter(word.into(), CL_DOUBLE)
}

const C_JUMP: &[Run] = &[
    run(12, 12, 11),
    run(11, 11, 4),
    run(10, 9, 8),
    run(8, 8, 10),
    run(7, 7, 6),
    run(6, 6, 7),
    run(5, 3, 1),
    run(2, 2, 5),
];

/// CJ-format 12-bit offset (`c.j`, `c.jal`), sign bit 11.
pub fn c_jump_off(word: u16) -> i32 {
    bits::signed(scatter(word.into(), C_JUMP), 0, 11)
}

const C_BRANCH: &[Run] = &[
    run(12, 12, 8),
    run(11, 10, 3),
    run(6, 5, 6),
    run(4, 3, 1),
    run(2, 2, 5),
];

/// CB-format 9-bit offset (`c.beqz`, `c.bnez`), sign bit 8.
pub fn c_branch_off(word: u16) -> i32 {
    bits::signed(scatter(word.into(), C_BRANCH), 0, 8)
}

const C_LWSP: &[Run] = &[run(12, 12, 5), run(6, 4, 2), run(3, 2, 6)];

/// `c.lwsp`/`c.flwsp` offset.
pub fn c_lwsp_off(word: u16) -> u32 {
    scatter(word.into(), C_LWSP)
}

const C_FLDSP: &[Run] = &[run(12, 12, 5), run(6, 5, 3), run(4, 2, 6)];

/// `c.fldsp` offset.
pub fn c_fldsp_off(word: u16) -> u32 {
    scatter(word.into(), C_FLDSP)
}

const C_SWSP: &[Run] = &[run(12, 9, 2), run(8, 7, 6)];

/// `c.swsp`/`c.fswsp` offset.
pub fn c_swsp_off(word: u16) -> u32 {
    scatter(word.into(), C_SWSP)
}

const C_FSDSP: &[Run] = &[run(12, 10, 3), run(9, 7, 6)];

/// `c.fsdsp` offset.
pub fn c_fsdsp_off(word: u16) -> u32 {
    scatter(word.into(), C_FSDSP)
}
