//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 16-bit, high byte fixed to the stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Cycle counter**: u64 total cycles consumed since reset
//!
//! ## Execution Model
//!
//! Memory is owned by the caller and borrowed for each call:
//! - `reset()`: Establish the documented initial state
//! - `execute()`: Run whole instructions until the cycle budget is exhausted
//! - `step()`: Run exactly one instruction against a caller-held budget
//!
//! Only `reset`, `step` and `execute` mutate processor state. The setters exist
//! for drivers that stage state between calls.

use crate::instructions;
use crate::{Cycles, ExecutionError, MemoryBus, OPCODE_TABLE};

/// Location the program counter is set to on reset.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Vector BRK loads the program counter from.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base address of the stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// 6502 processor state.
///
/// The CPU does not own its memory. Every call that needs the bus takes it by
/// reference, so a driver can inspect and rewrite memory between calls.
///
/// `CPU` is `Copy`, which makes before/after snapshots in tests trivial.
///
/// # Examples
///
/// ```
/// use emu6502::{Memory, CPU};
///
/// let mut memory = Memory::new();
/// memory[0xFFFC] = 0xA9; // LDA #$84
/// memory[0xFFFD] = 0x84;
///
/// let mut cpu = CPU::new();
/// cpu.reset();
///
/// let used = cpu.execute(1, &mut memory);
///
/// assert_eq!(used, 2); // the load always completes
/// assert_eq!(cpu.a(), 0x84);
/// assert!(cpu.flag_n());
/// assert!(!cpu.flag_z());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CPU {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer; only the low byte is meaningful
    pub(crate) sp: u16,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Break flag
    pub(crate) flag_b: bool,

    /// Decimal mode flag
    pub(crate) flag_d: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Total cycles consumed since reset
    pub(crate) cycles: u64,
}

impl CPU {
    /// Creates a CPU already in the reset state.
    pub fn new() -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: RESET_VECTOR,
            sp: STACK_PAGE,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            cycles: 0,
        }
    }

    /// Resets the processor.
    ///
    /// - PC = 0xFFFC (execution starts at the reset vector location itself)
    /// - SP = 0x0100
    /// - A = X = Y = 0
    /// - All seven flags cleared, including B
    /// - Cycle counter cleared
    pub fn reset(&mut self) {
        *self = Self::new();
        log::debug!(target: "cpu", "reset: pc={:#06x} sp={:#06x}", self.pc, self.sp);
    }

    /// Resets the processor and loads PC from the little-endian reset vector
    /// at 0xFFFC/0xFFFD, as the hardware does.
    ///
    /// ```
    /// use emu6502::{Memory, CPU};
    ///
    /// let mut memory = Memory::new();
    /// memory.load(0xFFFC, &[0x00, 0x80]);
    ///
    /// let mut cpu = CPU::new();
    /// cpu.reset_from_vector(&memory);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn reset_from_vector<M: MemoryBus>(&mut self, memory: &M) {
        *self = Self::new();
        self.pc = u16::from_le_bytes([memory.read(RESET_VECTOR), memory.read(RESET_VECTOR + 1)]);
        log::debug!(target: "cpu", "reset via vector: pc={:#06x}", self.pc);
    }

    /// Runs whole instructions until `cycle_budget` is used up.
    ///
    /// Returns the number of cycles actually consumed. An instruction that
    /// starts always completes, so the result can exceed the budget. A budget
    /// of zero or less executes nothing and returns 0.
    ///
    /// Unknown opcodes are reported through `log::warn!` and skipped after
    /// their one-cycle fetch; `execute` itself never fails.
    pub fn execute<M: MemoryBus>(&mut self, cycle_budget: i64, memory: &mut M) -> i64 {
        let mut cycles = Cycles::new(cycle_budget);

        while !cycles.is_exhausted() {
            if let Err(err) = self.step(&mut cycles, memory) {
                log::warn!(target: "cpu", "{err}");
            }
        }

        let consumed = cycles.consumed();
        log::debug!(
            target: "cpu",
            "executed {} of {} requested cycles, pc={:#06x}",
            consumed,
            cycle_budget,
            self.pc
        );
        consumed
    }

    /// Executes one instruction, charging its cycles against `cycles`.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at PC (one cycle)
    /// 2. Look up operation and addressing mode in the opcode table
    /// 3. Resolve the operand
    /// 4. Apply the operation
    ///
    /// # Returns
    ///
    /// - `Ok(())` if an instruction executed
    /// - `Err(ExecutionError::UnknownOpcode { .. })` if the byte is not a
    ///   documented opcode; the fetch cycle has still been charged and PC
    ///   points past the byte
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{Cycles, ExecutionError, Memory, CPU};
    ///
    /// let mut memory = Memory::new();
    /// memory[0xFFFC] = 0x02; // not a documented opcode
    ///
    /// let mut cpu = CPU::new();
    /// let mut cycles = Cycles::new(10);
    ///
    /// assert_eq!(
    ///     cpu.step(&mut cycles, &mut memory),
    ///     Err(ExecutionError::UnknownOpcode { opcode: 0x02, address: 0xFFFC })
    /// );
    /// assert_eq!(cycles.consumed(), 1);
    /// ```
    pub fn step<M: MemoryBus>(
        &mut self,
        cycles: &mut Cycles,
        memory: &mut M,
    ) -> Result<(), ExecutionError> {
        let start = cycles.consumed();
        let result = self.dispatch(cycles, memory);
        self.cycles += (cycles.consumed() - start) as u64;
        result
    }

    fn dispatch<M: MemoryBus>(
        &mut self,
        cycles: &mut Cycles,
        memory: &mut M,
    ) -> Result<(), ExecutionError> {
        let address = self.pc;
        let opcode = self.fetch_byte(cycles, memory);
        let metadata = &OPCODE_TABLE[opcode as usize];

        let Some(operation) = metadata.operation else {
            return Err(ExecutionError::UnknownOpcode { opcode, address });
        };

        log::trace!(
            target: "instr",
            "{:#06x} {} {:?}",
            address,
            operation.mnemonic(),
            metadata.addressing_mode
        );

        let operand = self.resolve(metadata.addressing_mode, operation.access(), cycles, memory);
        instructions::execute(self, operation, operand, cycles, memory);

        Ok(())
    }

    // ========== Fetch Unit ==========

    /// Reads the byte at PC and advances PC. One cycle.
    pub(crate) fn fetch_byte<M: MemoryBus>(&mut self, cycles: &mut Cycles, memory: &M) -> u8 {
        let data = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        cycles.consume(1);
        data
    }

    /// Fetches a little-endian word at PC. Two cycles.
    pub(crate) fn fetch_word<M: MemoryBus>(&mut self, cycles: &mut Cycles, memory: &M) -> u16 {
        let low = self.fetch_byte(cycles, memory);
        let high = self.fetch_byte(cycles, memory);
        u16::from_le_bytes([low, high])
    }

    // ========== Data Bus ==========

    /// Reads a data byte. One cycle.
    pub(crate) fn read_byte<M: MemoryBus>(&self, cycles: &mut Cycles, addr: u16, memory: &M) -> u8 {
        cycles.consume(1);
        memory.read(addr)
    }

    /// Reads a little-endian word. Two cycles.
    pub(crate) fn read_word<M: MemoryBus>(&self, cycles: &mut Cycles, addr: u16, memory: &M) -> u16 {
        let low = self.read_byte(cycles, addr, memory);
        let high = self.read_byte(cycles, addr.wrapping_add(1), memory);
        u16::from_le_bytes([low, high])
    }

    /// Writes a data byte. One cycle.
    pub(crate) fn write_byte<M: MemoryBus>(
        &self,
        cycles: &mut Cycles,
        addr: u16,
        value: u8,
        memory: &mut M,
    ) {
        cycles.consume(1);
        memory.write(addr, value);
    }

    // ========== Stack ==========
    //
    // Pushes store at the current SP location and then advance SP; pulls
    // retreat SP and then read. SP never leaves the stack page.

    /// Full address SP currently points at.
    pub(crate) fn stack_address(&self) -> u16 {
        STACK_PAGE | (self.sp & 0x00FF)
    }

    fn move_sp(&mut self, delta: i8) {
        let low = (self.sp as u8).wrapping_add_signed(delta);
        self.sp = STACK_PAGE | low as u16;
    }

    pub(crate) fn push_byte<M: MemoryBus>(&mut self, cycles: &mut Cycles, value: u8, memory: &mut M) {
        self.write_byte(cycles, self.stack_address(), value, memory);
        self.move_sp(1);
    }

    pub(crate) fn push_word<M: MemoryBus>(&mut self, cycles: &mut Cycles, value: u16, memory: &mut M) {
        memory.write_word(cycles, value, self.stack_address());
        self.move_sp(2);
    }

    pub(crate) fn pull_byte<M: MemoryBus>(&mut self, cycles: &mut Cycles, memory: &M) -> u8 {
        self.move_sp(-1);
        self.read_byte(cycles, self.stack_address(), memory)
    }

    pub(crate) fn pull_word<M: MemoryBus>(&mut self, cycles: &mut Cycles, memory: &M) -> u16 {
        self.move_sp(-2);
        self.read_word(cycles, self.stack_address(), memory)
    }

    // ========== Flag Helpers ==========

    /// Sets Z and N from a result byte.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }

    /// Restores C, Z, I, D, V and N from a status byte. B is left alone.
    pub(crate) fn restore_status(&mut self, status: u8) {
        let b = self.flag_b;
        self.set_status(status);
        self.flag_b = b;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer. The high byte is always 0x01.
    pub fn sp(&self) -> u16 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// ```
    /// use emu6502::CPU;
    ///
    /// let cpu = CPU::new();
    /// assert_eq!(cpu.status(), 0b0010_0000);
    /// ```
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000;

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Returns the total number of cycles consumed since reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Driver Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the low byte of SP; the high byte stays on the stack page.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = STACK_PAGE | value as u16;
    }

    /// Unpacks all seven flags from an NV-BDIZC byte. Bit 5 is ignored.
    pub fn set_status(&mut self, status: u8) {
        self.flag_n = status & 0b1000_0000 != 0;
        self.flag_v = status & 0b0100_0000 != 0;
        self.flag_b = status & 0b0001_0000 != 0;
        self.flag_d = status & 0b0000_1000 != 0;
        self.flag_i = status & 0b0000_0100 != 0;
        self.flag_z = status & 0b0000_0010 != 0;
        self.flag_c = status & 0b0000_0001 != 0;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Decimal flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
