//! # Opcode Table
//!
//! This module contains the 256-entry opcode table that drives dispatch. Each
//! entry pairs an [`Operation`] with the [`AddressingMode`] it uses, together
//! with the documented cycle cost and instruction size.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 unknown bytes** - `operation: None`; executing one costs the opcode fetch only
//!
//! Adding an opcode is a table change. The dispatch `match` over `Operation`
//! is exhaustive, so a new operation cannot be forgotten there.

use crate::addressing::{Access, AddressingMode};

/// Every documented 6502 operation, independent of addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Load accumulator
    Lda,
    /// Load X register
    Ldx,
    /// Load Y register
    Ldy,
    /// Store accumulator
    Sta,
    /// Store X register
    Stx,
    /// Store Y register
    Sty,
    /// Add with carry
    Adc,
    /// Subtract with carry
    Sbc,
    /// Logical AND
    And,
    /// Logical inclusive OR
    Ora,
    /// Exclusive OR
    Eor,
    /// Compare accumulator
    Cmp,
    /// Compare X register
    Cpx,
    /// Compare Y register
    Cpy,
    /// Bit test
    Bit,
    /// Arithmetic shift left
    Asl,
    /// Logical shift right
    Lsr,
    /// Rotate left
    Rol,
    /// Rotate right
    Ror,
    /// Increment memory
    Inc,
    /// Decrement memory
    Dec,
    /// Increment X
    Inx,
    /// Increment Y
    Iny,
    /// Decrement X
    Dex,
    /// Decrement Y
    Dey,
    /// Branch if carry clear
    Bcc,
    /// Branch if carry set
    Bcs,
    /// Branch if equal (Z set)
    Beq,
    /// Branch if not equal (Z clear)
    Bne,
    /// Branch if minus (N set)
    Bmi,
    /// Branch if plus (N clear)
    Bpl,
    /// Branch if overflow clear
    Bvc,
    /// Branch if overflow set
    Bvs,
    /// Jump
    Jmp,
    /// Jump to subroutine
    Jsr,
    /// Return from subroutine
    Rts,
    /// Return from interrupt
    Rti,
    /// Force interrupt
    Brk,
    /// No operation
    Nop,
    /// Push accumulator
    Pha,
    /// Push processor status
    Php,
    /// Pull accumulator
    Pla,
    /// Pull processor status
    Plp,
    /// Clear carry
    Clc,
    /// Set carry
    Sec,
    /// Clear interrupt disable
    Cli,
    /// Set interrupt disable
    Sei,
    /// Clear decimal mode
    Cld,
    /// Set decimal mode
    Sed,
    /// Clear overflow
    Clv,
    /// Transfer A to X
    Tax,
    /// Transfer A to Y
    Tay,
    /// Transfer X to A
    Txa,
    /// Transfer Y to A
    Tya,
    /// Transfer SP to X
    Tsx,
    /// Transfer X to SP
    Txs,
}

impl Operation {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Adc => "ADC",
            Operation::Sbc => "SBC",
            Operation::And => "AND",
            Operation::Ora => "ORA",
            Operation::Eor => "EOR",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Bit => "BIT",
            Operation::Asl => "ASL",
            Operation::Lsr => "LSR",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Inc => "INC",
            Operation::Dec => "DEC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bne => "BNE",
            Operation::Bmi => "BMI",
            Operation::Bpl => "BPL",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Rts => "RTS",
            Operation::Rti => "RTI",
            Operation::Brk => "BRK",
            Operation::Nop => "NOP",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Clc => "CLC",
            Operation::Sec => "SEC",
            Operation::Cli => "CLI",
            Operation::Sei => "SEI",
            Operation::Cld => "CLD",
            Operation::Sed => "SED",
            Operation::Clv => "CLV",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Txa => "TXA",
            Operation::Tya => "TYA",
            Operation::Tsx => "TSX",
            Operation::Txs => "TXS",
        }
    }

    /// How the operation uses its effective address.
    pub const fn access(self) -> Access {
        match self {
            Operation::Sta | Operation::Stx | Operation::Sty => Access::Write,
            Operation::Asl
            | Operation::Lsr
            | Operation::Rol
            | Operation::Ror
            | Operation::Inc
            | Operation::Dec => Access::Modify,
            _ => Access::Read,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Metadata for a single opcode byte.
///
/// # Fields
///
/// - `operation`: What the instruction does, `None` for unknown bytes
/// - `addressing_mode`: How the instruction interprets operand bytes
/// - `base_cycles`: Cycle cost without a page-crossing or taken-branch penalty
/// - `size_bytes`: Total instruction size including opcode and operands (1-3 bytes)
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.operation, Some(Operation::Lda));
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Operation performed, or `None` for an unknown opcode.
    pub operation: Option<Operation>,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// Entry for a byte that is not a documented opcode.
    pub const UNKNOWN: Self = Self {
        operation: None,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 1,
        size_bytes: 1,
    };

    /// Mnemonic, or `"???"` for unknown opcodes.
    pub const fn mnemonic(&self) -> &'static str {
        match self.operation {
            Some(operation) => operation.mnemonic(),
            None => "???",
        }
    }
}

const fn entry(operation: Operation, mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        operation: Some(operation),
        addressing_mode: mode,
        base_cycles,
        size_bytes: 1 + mode.operand_bytes(),
    }
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// ```
/// use emu6502::OPCODE_TABLE;
///
/// let jsr = &OPCODE_TABLE[0x20];
/// assert_eq!(jsr.mnemonic(), "JSR");
/// assert_eq!(jsr.base_cycles, 6);
///
/// let unknown = &OPCODE_TABLE[0x02];
/// assert_eq!(unknown.mnemonic(), "???");
/// assert_eq!(unknown.base_cycles, 1);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = {
    use AddressingMode::*;

    let mut table = [OpcodeMetadata::UNKNOWN; 256];

    // Load / store
    table[0xA9] = entry(Operation::Lda, Immediate, 2);
    table[0xA5] = entry(Operation::Lda, ZeroPage, 3);
    table[0xB5] = entry(Operation::Lda, ZeroPageX, 4);
    table[0xAD] = entry(Operation::Lda, Absolute, 4);
    table[0xBD] = entry(Operation::Lda, AbsoluteX, 4);
    table[0xB9] = entry(Operation::Lda, AbsoluteY, 4);
    table[0xA1] = entry(Operation::Lda, IndirectX, 6);
    table[0xB1] = entry(Operation::Lda, IndirectY, 5);
    table[0xA2] = entry(Operation::Ldx, Immediate, 2);
    table[0xA6] = entry(Operation::Ldx, ZeroPage, 3);
    table[0xB6] = entry(Operation::Ldx, ZeroPageY, 4);
    table[0xAE] = entry(Operation::Ldx, Absolute, 4);
    table[0xBE] = entry(Operation::Ldx, AbsoluteY, 4);
    table[0xA0] = entry(Operation::Ldy, Immediate, 2);
    table[0xA4] = entry(Operation::Ldy, ZeroPage, 3);
    table[0xB4] = entry(Operation::Ldy, ZeroPageX, 4);
    table[0xAC] = entry(Operation::Ldy, Absolute, 4);
    table[0xBC] = entry(Operation::Ldy, AbsoluteX, 4);
    table[0x85] = entry(Operation::Sta, ZeroPage, 3);
    table[0x95] = entry(Operation::Sta, ZeroPageX, 4);
    table[0x8D] = entry(Operation::Sta, Absolute, 4);
    table[0x9D] = entry(Operation::Sta, AbsoluteX, 5);
    table[0x99] = entry(Operation::Sta, AbsoluteY, 5);
    table[0x81] = entry(Operation::Sta, IndirectX, 6);
    table[0x91] = entry(Operation::Sta, IndirectY, 6);
    table[0x86] = entry(Operation::Stx, ZeroPage, 3);
    table[0x96] = entry(Operation::Stx, ZeroPageY, 4);
    table[0x8E] = entry(Operation::Stx, Absolute, 4);
    table[0x84] = entry(Operation::Sty, ZeroPage, 3);
    table[0x94] = entry(Operation::Sty, ZeroPageX, 4);
    table[0x8C] = entry(Operation::Sty, Absolute, 4);

    // Arithmetic and logic
    table[0x69] = entry(Operation::Adc, Immediate, 2);
    table[0x65] = entry(Operation::Adc, ZeroPage, 3);
    table[0x75] = entry(Operation::Adc, ZeroPageX, 4);
    table[0x6D] = entry(Operation::Adc, Absolute, 4);
    table[0x7D] = entry(Operation::Adc, AbsoluteX, 4);
    table[0x79] = entry(Operation::Adc, AbsoluteY, 4);
    table[0x61] = entry(Operation::Adc, IndirectX, 6);
    table[0x71] = entry(Operation::Adc, IndirectY, 5);
    table[0xE9] = entry(Operation::Sbc, Immediate, 2);
    table[0xE5] = entry(Operation::Sbc, ZeroPage, 3);
    table[0xF5] = entry(Operation::Sbc, ZeroPageX, 4);
    table[0xED] = entry(Operation::Sbc, Absolute, 4);
    table[0xFD] = entry(Operation::Sbc, AbsoluteX, 4);
    table[0xF9] = entry(Operation::Sbc, AbsoluteY, 4);
    table[0xE1] = entry(Operation::Sbc, IndirectX, 6);
    table[0xF1] = entry(Operation::Sbc, IndirectY, 5);
    table[0x29] = entry(Operation::And, Immediate, 2);
    table[0x25] = entry(Operation::And, ZeroPage, 3);
    table[0x35] = entry(Operation::And, ZeroPageX, 4);
    table[0x2D] = entry(Operation::And, Absolute, 4);
    table[0x3D] = entry(Operation::And, AbsoluteX, 4);
    table[0x39] = entry(Operation::And, AbsoluteY, 4);
    table[0x21] = entry(Operation::And, IndirectX, 6);
    table[0x31] = entry(Operation::And, IndirectY, 5);
    table[0x09] = entry(Operation::Ora, Immediate, 2);
    table[0x05] = entry(Operation::Ora, ZeroPage, 3);
    table[0x15] = entry(Operation::Ora, ZeroPageX, 4);
    table[0x0D] = entry(Operation::Ora, Absolute, 4);
    table[0x1D] = entry(Operation::Ora, AbsoluteX, 4);
    table[0x19] = entry(Operation::Ora, AbsoluteY, 4);
    table[0x01] = entry(Operation::Ora, IndirectX, 6);
    table[0x11] = entry(Operation::Ora, IndirectY, 5);
    table[0x49] = entry(Operation::Eor, Immediate, 2);
    table[0x45] = entry(Operation::Eor, ZeroPage, 3);
    table[0x55] = entry(Operation::Eor, ZeroPageX, 4);
    table[0x4D] = entry(Operation::Eor, Absolute, 4);
    table[0x5D] = entry(Operation::Eor, AbsoluteX, 4);
    table[0x59] = entry(Operation::Eor, AbsoluteY, 4);
    table[0x41] = entry(Operation::Eor, IndirectX, 6);
    table[0x51] = entry(Operation::Eor, IndirectY, 5);
    table[0xC9] = entry(Operation::Cmp, Immediate, 2);
    table[0xC5] = entry(Operation::Cmp, ZeroPage, 3);
    table[0xD5] = entry(Operation::Cmp, ZeroPageX, 4);
    table[0xCD] = entry(Operation::Cmp, Absolute, 4);
    table[0xDD] = entry(Operation::Cmp, AbsoluteX, 4);
    table[0xD9] = entry(Operation::Cmp, AbsoluteY, 4);
    table[0xC1] = entry(Operation::Cmp, IndirectX, 6);
    table[0xD1] = entry(Operation::Cmp, IndirectY, 5);
    table[0xE0] = entry(Operation::Cpx, Immediate, 2);
    table[0xE4] = entry(Operation::Cpx, ZeroPage, 3);
    table[0xEC] = entry(Operation::Cpx, Absolute, 4);
    table[0xC0] = entry(Operation::Cpy, Immediate, 2);
    table[0xC4] = entry(Operation::Cpy, ZeroPage, 3);
    table[0xCC] = entry(Operation::Cpy, Absolute, 4);
    table[0x24] = entry(Operation::Bit, ZeroPage, 3);
    table[0x2C] = entry(Operation::Bit, Absolute, 4);

    // Shifts and rotates
    table[0x0A] = entry(Operation::Asl, Accumulator, 2);
    table[0x06] = entry(Operation::Asl, ZeroPage, 5);
    table[0x16] = entry(Operation::Asl, ZeroPageX, 6);
    table[0x0E] = entry(Operation::Asl, Absolute, 6);
    table[0x1E] = entry(Operation::Asl, AbsoluteX, 7);
    table[0x4A] = entry(Operation::Lsr, Accumulator, 2);
    table[0x46] = entry(Operation::Lsr, ZeroPage, 5);
    table[0x56] = entry(Operation::Lsr, ZeroPageX, 6);
    table[0x4E] = entry(Operation::Lsr, Absolute, 6);
    table[0x5E] = entry(Operation::Lsr, AbsoluteX, 7);
    table[0x2A] = entry(Operation::Rol, Accumulator, 2);
    table[0x26] = entry(Operation::Rol, ZeroPage, 5);
    table[0x36] = entry(Operation::Rol, ZeroPageX, 6);
    table[0x2E] = entry(Operation::Rol, Absolute, 6);
    table[0x3E] = entry(Operation::Rol, AbsoluteX, 7);
    table[0x6A] = entry(Operation::Ror, Accumulator, 2);
    table[0x66] = entry(Operation::Ror, ZeroPage, 5);
    table[0x76] = entry(Operation::Ror, ZeroPageX, 6);
    table[0x6E] = entry(Operation::Ror, Absolute, 6);
    table[0x7E] = entry(Operation::Ror, AbsoluteX, 7);

    // Increments and decrements
    table[0xE6] = entry(Operation::Inc, ZeroPage, 5);
    table[0xF6] = entry(Operation::Inc, ZeroPageX, 6);
    table[0xEE] = entry(Operation::Inc, Absolute, 6);
    table[0xFE] = entry(Operation::Inc, AbsoluteX, 7);
    table[0xC6] = entry(Operation::Dec, ZeroPage, 5);
    table[0xD6] = entry(Operation::Dec, ZeroPageX, 6);
    table[0xCE] = entry(Operation::Dec, Absolute, 6);
    table[0xDE] = entry(Operation::Dec, AbsoluteX, 7);
    table[0xE8] = entry(Operation::Inx, Implicit, 2);
    table[0xC8] = entry(Operation::Iny, Implicit, 2);
    table[0xCA] = entry(Operation::Dex, Implicit, 2);
    table[0x88] = entry(Operation::Dey, Implicit, 2);

    // Branches
    table[0x90] = entry(Operation::Bcc, Relative, 2);
    table[0xB0] = entry(Operation::Bcs, Relative, 2);
    table[0xF0] = entry(Operation::Beq, Relative, 2);
    table[0xD0] = entry(Operation::Bne, Relative, 2);
    table[0x30] = entry(Operation::Bmi, Relative, 2);
    table[0x10] = entry(Operation::Bpl, Relative, 2);
    table[0x50] = entry(Operation::Bvc, Relative, 2);
    table[0x70] = entry(Operation::Bvs, Relative, 2);

    // Control flow
    table[0x4C] = entry(Operation::Jmp, Absolute, 3);
    table[0x6C] = entry(Operation::Jmp, Indirect, 5);
    table[0x20] = entry(Operation::Jsr, Absolute, 6);
    table[0x60] = entry(Operation::Rts, Implicit, 6);
    table[0x40] = entry(Operation::Rti, Implicit, 6);
    table[0x00] = entry(Operation::Brk, Implicit, 7);
    table[0xEA] = entry(Operation::Nop, Implicit, 2);

    // Stack
    table[0x48] = entry(Operation::Pha, Implicit, 3);
    table[0x08] = entry(Operation::Php, Implicit, 3);
    table[0x68] = entry(Operation::Pla, Implicit, 4);
    table[0x28] = entry(Operation::Plp, Implicit, 4);

    // Flags
    table[0x18] = entry(Operation::Clc, Implicit, 2);
    table[0x38] = entry(Operation::Sec, Implicit, 2);
    table[0x58] = entry(Operation::Cli, Implicit, 2);
    table[0x78] = entry(Operation::Sei, Implicit, 2);
    table[0xD8] = entry(Operation::Cld, Implicit, 2);
    table[0xF8] = entry(Operation::Sed, Implicit, 2);
    table[0xB8] = entry(Operation::Clv, Implicit, 2);

    // Transfers
    table[0xAA] = entry(Operation::Tax, Implicit, 2);
    table[0xA8] = entry(Operation::Tay, Implicit, 2);
    table[0x8A] = entry(Operation::Txa, Implicit, 2);
    table[0x98] = entry(Operation::Tya, Implicit, 2);
    table[0xBA] = entry(Operation::Tsx, Implicit, 2);
    table[0x9A] = entry(Operation::Txs, Implicit, 2);

    table
};
