//! Compressed ("C" extension) instruction decoding.
//!
//! A 16-bit instruction is dispatched on its quadrant (bits `[1:0]`)
//! and funct3 (bits `[15:13]`). Quadrant 3 is not a compressed
//! encoding; the walker never routes it here.

use rvdump_core::Instruction;

use crate::bits;
use crate::decoder::Decoder;
use crate::imm;
use crate::DecodeError;

impl Decoder<'_> {
    /// Decode a compressed instruction at `address`.
    pub fn decode_compressed(&self, word: u16, address: u32) -> Result<Instruction, DecodeError> {
        match word & 0x3 {
            0b00 => self.decode_quadrant0(word, address),
            0b01 => self.decode_quadrant1(word, address),
            0b10 => self.decode_quadrant2(word, address),
            _ => Err(DecodeError::unknown16(address, word)),
        }
    }

    /// Quadrant 0: stack-pointer arithmetic and the register-relative
    /// loads and stores over the popular `x8`-`x15` registers.
    fn decode_quadrant0(&self, word: u16, address: u32) -> Result<Instruction, DecodeError> {
        let w = word as u32;
        // Bits 4:2 hold rd' for loads and rs2' for stores; either way
        // it is the data register. Bits 9:7 hold the base register.
        let data = self.creg(bits::unsigned(w, 2, 4))?;
        let base = self.creg(bits::unsigned(w, 7, 9))?;

        let inst = match bits::unsigned(w, 13, 15) {
            0b000 => Instruction::new(address, "c.addi4spn").with_operands(vec![
                data,
                self.reg(2)?,
                imm::c_addi4spn_imm(word).to_string(),
            ]),
            0b001 => Instruction::new(address, "c.fld")
                .with_operands(vec![data, imm::cl_double_off(word).to_string(), base])
                .with_memory_syntax(),
            0b010 => Instruction::new(address, "c.lw")
                .with_operands(vec![data, imm::cl_word_off(word).to_string(), base])
                .with_memory_syntax(),
            0b011 => Instruction::new(address, "c.flw")
                .with_operands(vec![data, imm::cl_word_off(word).to_string(), base])
                .with_memory_syntax(),
            0b101 => Instruction::new(address, "c.fsd")
                .with_operands(vec![data, imm::cl_double_off(word).to_string(), base])
                .with_memory_syntax(),
            0b110 => Instruction::new(address, "c.sw")
                .with_operands(vec![data, imm::cl_word_off(word).to_string(), base])
                .with_memory_syntax(),
            0b111 => Instruction::new(address, "c.fsw")
                .with_operands(vec![data, imm::cl_word_off(word).to_string(), base])
                .with_memory_syntax(),
            _ => return Err(DecodeError::unknown16(address, word)),
        };
        Ok(inst)
    }

    /// Quadrant 1: immediate arithmetic, jumps, and branches.
    fn decode_quadrant1(&self, word: u16, address: u32) -> Result<Instruction, DecodeError> {
        let w = word as u32;

        if bits::unsigned(w, 2, 15) == 0 {
            return Ok(Instruction::new(address, "c.nop"));
        }

        let inst = match bits::unsigned(w, 13, 15) {
            0b000 => {
                let rd = self.reg(bits::unsigned(w, 7, 11))?;
                Instruction::new(address, "c.addi").with_operands(vec![
                    rd.clone(),
                    rd,
                    imm::ci_imm(word).to_string(),
                ])
            }
            0b001 => Instruction::new(address, "c.jal")
                .with_operands(vec![self.target(address, imm::c_jump_off(word))]),
            0b010 => Instruction::new(address, "c.li").with_operands(vec![
                self.reg(bits::unsigned(w, 7, 11))?,
                imm::ci_imm(word).to_string(),
            ]),
            0b011 if bits::unsigned(w, 7, 11) == 2 => {
                let sp = self.reg(2)?;
                Instruction::new(address, "c.addi16sp").with_operands(vec![
                    sp.clone(),
                    sp,
                    imm::c_addi16sp_imm(word).to_string(),
                ])
            }
            0b011 => Instruction::new(address, "c.lui").with_operands(vec![
                self.reg(bits::unsigned(w, 7, 11))?,
                imm::c_lui_imm(word).to_string(),
            ]),
            0b100 => return self.decode_quadrant1_alu(word, address),
            0b101 => Instruction::new(address, "c.j")
                .with_operands(vec![self.target(address, imm::c_jump_off(word))]),
            0b110 => Instruction::new(address, "c.beqz").with_operands(vec![
                self.creg(bits::unsigned(w, 7, 9))?,
                self.target(address, imm::c_branch_off(word)),
            ]),
            0b111 => Instruction::new(address, "c.bnez").with_operands(vec![
                self.creg(bits::unsigned(w, 7, 9))?,
                self.target(address, imm::c_branch_off(word)),
            ]),
            _ => return Err(DecodeError::unknown16(address, word)),
        };
        Ok(inst)
    }

    /// Quadrant 1 funct3 `100`: the ALU subgroup over `x8`-`x15`,
    /// selected by bits `[11:10]`.
    fn decode_quadrant1_alu(&self, word: u16, address: u32) -> Result<Instruction, DecodeError> {
        let w = word as u32;
        let rd = self.creg(bits::unsigned(w, 7, 9))?;

        let inst = match bits::unsigned(w, 10, 11) {
            0b00 => Instruction::new(address, "c.srli").with_operands(vec![
                rd.clone(),
                rd,
                imm::ci_shamt(word).to_string(),
            ]),
            0b01 => Instruction::new(address, "c.srai").with_operands(vec![
                rd.clone(),
                rd,
                imm::ci_shamt(word).to_string(),
            ]),
            0b10 => Instruction::new(address, "c.andi").with_operands(vec![
                rd.clone(),
                rd,
                imm::ci_imm(word).to_string(),
            ]),
            _ => {
                // Register-register subgroup: {w[12], w[6:5]}.
                let subtype = (bits::unsigned(w, 12, 12) << 2) | bits::unsigned(w, 5, 6);
                let mnemonic = match subtype {
                    0b000 => "c.sub",
                    0b001 => "c.xor",
                    0b010 => "c.or",
                    0b011 => "c.and",
                    0b100 => "c.subw",
                    0b101 => "c.addw",
                    _ => return Err(DecodeError::unknown16(address, word)),
                };
                let rs2 = self.creg(bits::unsigned(w, 2, 4))?;
                Instruction::new(address, mnemonic).with_operands(vec![rd.clone(), rd, rs2])
            }
        };
        Ok(inst)
    }

    /// Quadrant 2: full-register shifts, moves, indirect jumps, and the
    /// stack-pointer-relative loads and stores.
    fn decode_quadrant2(&self, word: u16, address: u32) -> Result<Instruction, DecodeError> {
        let w = word as u32;
        let rd = bits::unsigned(w, 7, 11);
        let rs2 = bits::unsigned(w, 2, 6);
        let sp = self.reg(2)?;

        let inst = match bits::unsigned(w, 13, 15) {
            0b000 => {
                let rd = self.reg(rd)?;
                Instruction::new(address, "c.slli").with_operands(vec![
                    rd.clone(),
                    rd,
                    imm::ci_shamt(word).to_string(),
                ])
            }
            0b001 => Instruction::new(address, "c.fldsp")
                .with_operands(vec![self.reg(rd)?, imm::c_fldsp_off(word).to_string(), sp])
                .with_memory_syntax(),
            0b010 => Instruction::new(address, "c.lwsp")
                .with_operands(vec![self.reg(rd)?, imm::c_lwsp_off(word).to_string(), sp])
                .with_memory_syntax(),
            0b011 => Instruction::new(address, "c.flwsp")
                .with_operands(vec![self.reg(rd)?, imm::c_lwsp_off(word).to_string(), sp])
                .with_memory_syntax(),
            0b100 => {
                if rs2 != 0 {
                    if bits::unsigned(w, 12, 12) == 1 {
                        let rd = self.reg(rd)?;
                        Instruction::new(address, "c.add").with_operands(vec![
                            rd.clone(),
                            rd,
                            self.reg(rs2)?,
                        ])
                    } else {
                        Instruction::new(address, "c.mv")
                            .with_operands(vec![self.reg(rd)?, self.reg(rs2)?])
                    }
                } else if bits::unsigned(w, 7, 15) == 0b1_0010_0000 {
                    Instruction::new(address, "c.ebreak")
                } else if bits::unsigned(w, 12, 12) == 0 {
                    Instruction::new(address, "c.jr").with_operands(vec![self.reg(rd)?])
                } else {
                    Instruction::new(address, "c.jalr").with_operands(vec![self.reg(rd)?])
                }
            }
            0b101 => Instruction::new(address, "c.fsdsp")
                .with_operands(vec![self.reg(rs2)?, imm::c_fsdsp_off(word).to_string(), sp])
                .with_memory_syntax(),
            0b110 => Instruction::new(address, "c.swsp")
                .with_operands(vec![self.reg(rs2)?, imm::c_swsp_off(word).to_string(), sp])
                .with_memory_syntax(),
            0b111 => Instruction::new(address, "c.fswsp")
                .with_operands(vec![self.reg(rs2)?, imm::c_swsp_off(word).to_string(), sp])
                .with_memory_syntax(),
            _ => return Err(DecodeError::unknown16(address, word)),
        };
        Ok(inst)
    }
}
