//! # Register Transfer Instructions
//!
//! - TAX, TAY, TXA, TYA: Copy between A and an index register, set Z and N
//! - TSX: Copy the low byte of SP into X, set Z and N
//! - TXS: Copy X into the low byte of SP, flags untouched
//!
//! Each costs 2 cycles.

use crate::{Cycles, CPU, STACK_PAGE};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.x = cpu.a;
    cpu.set_zn(cpu.x);
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.y = cpu.a;
    cpu.set_zn(cpu.y);
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.a = cpu.x;
    cpu.set_zn(cpu.a);
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.a = cpu.y;
    cpu.set_zn(cpu.a);
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.x = cpu.sp as u8;
    cpu.set_zn(cpu.x);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The only transfer that leaves the flags alone.
pub(crate) fn execute_txs(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.sp = STACK_PAGE | cpu.x as u16;
}
