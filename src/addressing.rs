//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns an instruction's operand bytes into an
//! [`Operand`]: an immediate value, a branch offset, or an effective address.
//!
//! Resolution always happens before the operation is applied. The resolver
//! only moves the program counter (through the fetch unit) and charges
//! cycles; it never touches registers or flags.

use crate::{Cycles, MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (branch if zero flag set, offset is relative to PC)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// How an operation uses its effective address.
///
/// Indexed modes that can cross a page only pay the fix-up cycle on a
/// crossing for reads. Writes and read-modify-write always pay it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Reads the operand (loads, ALU, compares).
    Read,
    /// Writes the operand (stores).
    Write,
    /// Reads, modifies and writes back (shifts, INC, DEC).
    Modify,
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand.
    Implied,
    /// The accumulator is the operand.
    Accumulator,
    /// The operand byte is the value.
    Immediate(u8),
    /// Signed branch displacement.
    Relative(i8),
    /// Effective memory address.
    Address(u16),
}

/// Adds an index register to a zero page base, wrapping within the zero page.
///
/// ```
/// use emu6502::addressing::zero_page_indexed;
///
/// assert_eq!(zero_page_indexed(0x80, 0xFF), 0x007F);
/// assert_eq!(zero_page_indexed(0x42, 0x05), 0x0047);
/// ```
pub fn zero_page_indexed(base: u8, index: u8) -> u16 {
    base.wrapping_add(index) as u16
}

/// Returns true if `base` and `addr` lie in different 256-byte pages.
///
/// ```
/// use emu6502::addressing::page_crossed;
///
/// assert!(page_crossed(0x4402, 0x4501));
/// assert!(!page_crossed(0x4480, 0x4481));
/// ```
pub fn page_crossed(base: u16, addr: u16) -> bool {
    (base & 0xFF00) != (addr & 0xFF00)
}

impl CPU {
    /// Consumes the operand bytes for `mode` and produces the operand.
    pub(crate) fn resolve<M: MemoryBus>(
        &mut self,
        mode: AddressingMode,
        access: Access,
        cycles: &mut Cycles,
        memory: &M,
    ) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.fetch_byte(cycles, memory)),
            AddressingMode::Relative => Operand::Relative(self.fetch_byte(cycles, memory) as i8),
            AddressingMode::ZeroPage => Operand::Address(self.fetch_byte(cycles, memory) as u16),
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte(cycles, memory);
                // Index addition
                cycles.consume(1);
                Operand::Address(zero_page_indexed(base, self.x))
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte(cycles, memory);
                cycles.consume(1);
                Operand::Address(zero_page_indexed(base, self.y))
            }
            AddressingMode::Absolute => Operand::Address(self.fetch_word(cycles, memory)),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(cycles, memory);
                Operand::Address(self.index_with_penalty(base, self.x, access, cycles))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(cycles, memory);
                Operand::Address(self.index_with_penalty(base, self.y, access, cycles))
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_word(cycles, memory);
                // NMOS bug: the high byte never carries into the next page
                let high_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let low = self.read_byte(cycles, pointer, memory);
                let high = self.read_byte(cycles, high_addr, memory);
                Operand::Address(u16::from_le_bytes([low, high]))
            }
            AddressingMode::IndirectX => {
                let base = self.fetch_byte(cycles, memory);
                cycles.consume(1);
                let pointer = base.wrapping_add(self.x);
                Operand::Address(self.read_zero_page_word(cycles, pointer, memory))
            }
            AddressingMode::IndirectY => {
                let pointer = self.fetch_byte(cycles, memory);
                let base = self.read_zero_page_word(cycles, pointer, memory);
                Operand::Address(self.index_with_penalty(base, self.y, access, cycles))
            }
        }
    }

    /// 16-bit indexed address with the page-cross fix-up cycle.
    fn index_with_penalty(&self, base: u16, index: u8, access: Access, cycles: &mut Cycles) -> u16 {
        let addr = base.wrapping_add(index as u16);
        if access != Access::Read || page_crossed(base, addr) {
            cycles.consume(1);
        }
        addr
    }

    /// Reads a pointer from the zero page; the high byte wraps 0xFF -> 0x00.
    fn read_zero_page_word<M: MemoryBus>(
        &self,
        cycles: &mut Cycles,
        pointer: u8,
        memory: &M,
    ) -> u16 {
        let low = self.read_byte(cycles, pointer as u16, memory);
        let high = self.read_byte(cycles, pointer.wrapping_add(1) as u16, memory);
        u16::from_le_bytes([low, high])
    }

    /// Produces the value an operand refers to, reading memory if needed.
    pub(crate) fn operand_value<M: MemoryBus>(
        &self,
        operand: Operand,
        cycles: &mut Cycles,
        memory: &M,
    ) -> u8 {
        match operand {
            Operand::Immediate(value) => value,
            Operand::Accumulator => self.a,
            Operand::Address(addr) => self.read_byte(cycles, addr, memory),
            Operand::Implied | Operand::Relative(_) => {
                unreachable!("opcode table pairs value operations with value modes")
            }
        }
    }
}
