//! # Control Flow Instructions
//!
//! - JMP: Jump (absolute or indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//! - BRK: Force Interrupt
//! - NOP: No Operation
//!
//! The stack grows upward: a push writes at SP and then advances it. JSR
//! pushes PC-1 as a little-endian word, RTS pulls it and adds one.

use super::effective_address;
use crate::{Cycles, MemoryBus, Operand, CPU, IRQ_VECTOR};

/// Executes the JMP (Jump) instruction.
///
/// The resolver has already read the target (and applied the indirect page
/// bug), so JMP costs no further cycles.
pub(crate) fn execute_jmp(cpu: &mut CPU, operand: Operand) {
    cpu.pc = effective_address(operand);
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// # Cycle Timing
///
/// 6 cycles: opcode, two target bytes, two stack writes, one internal.
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let target = effective_address(operand);
    let return_address = cpu.pc.wrapping_sub(1);

    cpu.push_word(cycles, return_address, memory);
    cycles.consume(1);

    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// 6 cycles: opcode, two stack reads, three internal.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU, cycles: &mut Cycles, memory: &mut M) {
    let return_address = cpu.pull_word(cycles, memory);
    cycles.consume(3);
    cpu.pc = return_address.wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status byte and then the program counter. B keeps its current
/// value. 6 cycles.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU, cycles: &mut Cycles, memory: &mut M) {
    let status = cpu.pull_byte(cycles, memory);
    cpu.restore_status(status);
    cpu.pc = cpu.pull_word(cycles, memory);
    cycles.consume(2);
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Skips the padding byte, pushes PC and then the status with B and bit 5
/// set, sets I, and loads PC from the IRQ vector at 0xFFFE/0xFFFF.
///
/// # Cycle Timing
///
/// 7 cycles: opcode, padding, three stack writes, two vector reads.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU, cycles: &mut Cycles, memory: &mut M) {
    cpu.fetch_byte(cycles, memory);

    let return_address = cpu.pc;
    cpu.push_word(cycles, return_address, memory);

    let status = cpu.status() | 0b0011_0000;
    cpu.push_byte(cycles, status, memory);

    cpu.flag_i = true;
    cpu.pc = cpu.read_word(cycles, IRQ_VECTOR, memory);

    log::debug!(target: "cpu", "BRK at {:#06x}, vectoring to {:#06x}", return_address.wrapping_sub(2), cpu.pc);
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop(cycles: &mut Cycles) {
    cycles.consume(1);
}
