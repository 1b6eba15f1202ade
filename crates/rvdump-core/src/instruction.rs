//! The decoded-instruction record and its canonical text rendering.

use crate::DecoderBug;

/// A single decoded instruction, ready to be printed.
///
/// Operands are already rendered: register names, signed or unsigned
/// decimal immediates, or resolved symbol names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Offset of the instruction within `.text`.
    pub address: u32,
    /// Lower-case mnemonic; compressed forms carry the `c.` prefix.
    pub mnemonic: &'static str,
    /// Operands in emission order.
    pub operands: Vec<String>,
    /// Selects the memory operand syntax, where the last operand is
    /// parenthesized (`lw a0, 4(sp)`).
    pub memory_syntax: bool,
}

impl Instruction {
    /// Creates an instruction with no operands.
    pub fn new(address: u32, mnemonic: &'static str) -> Self {
        Self {
            address,
            mnemonic,
            operands: Vec::new(),
            memory_syntax: false,
        }
    }

    /// Sets the operand list.
    pub fn with_operands(mut self, operands: Vec<String>) -> Self {
        self.operands = operands;
        self
    }

    /// Marks the instruction as using the memory operand syntax.
    pub fn with_memory_syntax(mut self) -> Self {
        self.memory_syntax = true;
        self
    }

    /// Renders the mnemonic and operands in canonical form.
    ///
    /// Normal shape: `mnemonic op1, op2, ...` (up to four operands).
    /// Memory shape: the last operand is parenthesized, e.g.
    /// `lw a0, 4(sp)`; a lone operand attaches directly to the
    /// mnemonic.
    pub fn render(&self) -> Result<String, DecoderBug> {
        let ops = &self.operands;
        if !self.memory_syntax {
            return match ops.len() {
                0 => Ok(self.mnemonic.to_string()),
                1..=4 => Ok(format!("{} {}", self.mnemonic, ops.join(", "))),
                n => Err(DecoderBug::OperandCount(n)),
            };
        }
        match ops.as_slice() {
            [base] => Ok(format!("{}({})", self.mnemonic, base)),
            [front @ .., base] if front.len() <= 3 => {
                Ok(format!("{} {}({})", self.mnemonic, front.join(", "), base))
            }
            other => Err(DecoderBug::OperandCount(other.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn renders_bare_mnemonic() {
        let inst = Instruction::new(0, "c.nop");
        assert_eq!(inst.render().unwrap(), "c.nop");
    }

    #[test]
    fn renders_comma_separated_operands() {
        let inst = Instruction::new(0, "addi").with_operands(ops(&["a0", "zero", "10"]));
        assert_eq!(inst.render().unwrap(), "addi a0, zero, 10");
    }

    #[test]
    fn renders_memory_syntax() {
        let inst = Instruction::new(0, "lw")
            .with_operands(ops(&["a0", "4", "sp"]))
            .with_memory_syntax();
        assert_eq!(inst.render().unwrap(), "lw a0, 4(sp)");

        let inst = Instruction::new(0, "c.swsp")
            .with_operands(ops(&["a0", "0", "sp"]))
            .with_memory_syntax();
        assert_eq!(inst.render().unwrap(), "c.swsp a0, 0(sp)");
    }

    #[test]
    fn renders_four_operand_memory_shape() {
        let inst = Instruction::new(0, "x")
            .with_operands(ops(&["a", "b", "c", "d"]))
            .with_memory_syntax();
        assert_eq!(inst.render().unwrap(), "x a, b, c(d)");
    }

    #[test]
    fn rejects_impossible_operand_counts() {
        let inst = Instruction::new(0, "x").with_operands(ops(&["a", "b", "c", "d", "e"]));
        assert!(matches!(inst.render(), Err(DecoderBug::OperandCount(5))));

        let inst = Instruction::new(0, "x").with_memory_syntax();
        assert!(matches!(inst.render(), Err(DecoderBug::OperandCount(0))));
    }
}
