//! Base (32-bit) RV32I and M-extension instruction decoding.
//!
//! Dispatch is on the 7-bit opcode in bits `[6:0]`, then on funct3 and
//! the funct7/funct2 fields where the opcode group requires it.

use rvdump_core::Instruction;

use crate::bits;
use crate::decoder::Decoder;
use crate::imm;
use crate::DecodeError;

// Standard 32-bit opcodes (bits 6:0).
const OP_LUI: u32 = 0b0110111;
const OP_AUIPC: u32 = 0b0010111;
const OP_IMM: u32 = 0b0010011;
const OP_REG: u32 = 0b0110011;
const OP_LOAD: u32 = 0b0000011;
const OP_STORE: u32 = 0b0100011;
const OP_JAL: u32 = 0b1101111;
const OP_JALR: u32 = 0b1100111;
const OP_BRANCH: u32 = 0b1100011;

impl Decoder<'_> {
    /// Decode a full 32-bit instruction at `address`.
    pub fn decode_word(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        match bits::unsigned(word, 0, 6) {
            OP_LUI => self.decode_upper(word, address, "lui"),
            OP_AUIPC => self.decode_upper(word, address, "auipc"),
            OP_IMM => self.decode_op_imm(word, address),
            OP_REG => self.decode_op_reg(word, address),
            OP_LOAD => self.decode_load(word, address),
            OP_STORE => self.decode_store(word, address),
            OP_JAL => self.decode_jal(word, address),
            OP_JALR => self.decode_jalr(word, address),
            OP_BRANCH => self.decode_branch(word, address),
            _ => Err(DecodeError::unknown32(address, word)),
        }
    }

    fn rd(word: u32) -> u32 {
        bits::unsigned(word, 7, 11)
    }

    fn rs1(word: u32) -> u32 {
        bits::unsigned(word, 15, 19)
    }

    fn rs2(word: u32) -> u32 {
        bits::unsigned(word, 20, 24)
    }

    fn funct3(word: u32) -> u32 {
        bits::unsigned(word, 12, 14)
    }

    /// LUI and AUIPC: rd plus the shifted U-immediate.
    fn decode_upper(
        &self,
        word: u32,
        address: u32,
        mnemonic: &'static str,
    ) -> Result<Instruction, DecodeError> {
        Ok(Instruction::new(address, mnemonic).with_operands(vec![
            self.reg(Self::rd(word))?,
            imm::imm_u(word).to_string(),
        ]))
    }

    /// OP-IMM: immediate arithmetic, with the shift group carrying its
    /// amount in the low I-field bits.
    fn decode_op_imm(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        let rd = self.reg(Self::rd(word))?;
        let rs1 = self.reg(Self::rs1(word))?;

        let inst = match Self::funct3(word) {
            funct3 @ (0b001 | 0b101) => {
                let mnemonic = if funct3 == 0b001 {
                    "slli"
                } else if bits::unsigned(word, 30, 30) == 0 {
                    "srli"
                } else {
                    "srai"
                };
                let shamt = bits::unsigned(word, 20, 24);
                Instruction::new(address, mnemonic)
                    .with_operands(vec![rd, rs1, shamt.to_string()])
            }
            funct3 => {
                let mnemonic = match funct3 {
                    0b000 => "addi",
                    0b010 => "slti",
                    0b011 => "sltiu",
                    0b100 => "xori",
                    0b110 => "ori",
                    0b111 => "andi",
                    _ => return Err(DecodeError::unknown32(address, word)),
                };
                Instruction::new(address, mnemonic).with_operands(vec![
                    rd,
                    rs1,
                    imm::imm_i(word).to_string(),
                ])
            }
        };
        Ok(inst)
    }

    /// OP: register-register arithmetic. Funct2 (bits 26:25) selects
    /// the integer group or the M extension.
    fn decode_op_reg(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        let funct3 = Self::funct3(word);
        let mnemonic = match bits::unsigned(word, 25, 26) {
            0b00 => match (bits::unsigned(word, 27, 31), funct3) {
                (0b00000, 0b000) => "add",
                (0b01000, 0b000) => "sub",
                (0b00000, 0b001) => "sll",
                (0b00000, 0b010) => "slt",
                (0b00000, 0b011) => "sltu",
                (0b00000, 0b100) => "xor",
                (0b00000, 0b101) => "srl",
                (0b01000, 0b101) => "sra",
                (0b00000, 0b110) => "or",
                (0b00000, 0b111) => "and",
                _ => return Err(DecodeError::unknown32(address, word)),
            },
            0b01 => match funct3 {
                0b000 => "mul",
                0b001 => "mulh",
                0b010 => "mulhsu",
                0b011 => "mulhu",
                0b100 => "div",
                0b101 => "divu",
                0b110 => "rem",
                _ => "remu",
            },
            _ => return Err(DecodeError::unknown32(address, word)),
        };

        Ok(Instruction::new(address, mnemonic).with_operands(vec![
            self.reg(Self::rd(word))?,
            self.reg(Self::rs1(word))?,
            self.reg(Self::rs2(word))?,
        ]))
    }

    /// Loads: rd from memory at rs1 plus the I-immediate.
    fn decode_load(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        let mnemonic = match Self::funct3(word) {
            0b000 => "lb",
            0b001 => "lh",
            0b010 => "lw",
            0b100 => "lbu",
            0b101 => "lhu",
            _ => return Err(DecodeError::unknown32(address, word)),
        };

        Ok(Instruction::new(address, mnemonic)
            .with_operands(vec![
                self.reg(Self::rd(word))?,
                imm::imm_i(word).to_string(),
                self.reg(Self::rs1(word))?,
            ])
            .with_memory_syntax())
    }

    /// Stores: rs2 to memory at rs1 plus the S-immediate.
    fn decode_store(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        let mnemonic = match Self::funct3(word) {
            0b000 => "sb",
            0b001 => "sh",
            0b010 => "sw",
            _ => return Err(DecodeError::unknown32(address, word)),
        };

        Ok(Instruction::new(address, mnemonic)
            .with_operands(vec![
                self.reg(Self::rs2(word))?,
                imm::imm_s(word).to_string(),
                self.reg(Self::rs1(word))?,
            ])
            .with_memory_syntax())
    }

    fn decode_jal(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        Ok(Instruction::new(address, "jal").with_operands(vec![
            self.reg(Self::rd(word))?,
            self.target(address, imm::imm_j(word)),
        ]))
    }

    /// JALR keeps its displacement numeric: the branch base is a
    /// runtime register value, so there is no static target to name.
    fn decode_jalr(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        Ok(Instruction::new(address, "jalr").with_operands(vec![
            self.reg(Self::rd(word))?,
            self.reg(Self::rs1(word))?,
            imm::imm_i(word).to_string(),
        ]))
    }

    fn decode_branch(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        let mnemonic = match Self::funct3(word) {
            0b000 => "beq",
            0b001 => "bne",
            0b100 => "blt",
            0b101 => "bge",
            0b110 => "bltu",
            0b111 => "bgeu",
            _ => return Err(DecodeError::unknown32(address, word)),
        };

        Ok(Instruction::new(address, mnemonic).with_operands(vec![
            self.reg(Self::rs1(word))?,
            self.reg(Self::rs2(word))?,
            self.target(address, imm::imm_b(word)),
        ]))
    }
}
