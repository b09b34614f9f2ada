//! # Stack Instructions
//!
//! - PHA: Push Accumulator (3 cycles)
//! - PHP: Push Processor Status (3 cycles)
//! - PLA: Pull Accumulator (4 cycles)
//! - PLP: Pull Processor Status (4 cycles)
//!
//! Every one of them spends one internal cycle after the opcode fetch; pulls
//! spend a second one adjusting SP before the read.

use crate::{Cycles, MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU, cycles: &mut Cycles, memory: &mut M) {
    cycles.consume(1);
    let value = cpu.a;
    cpu.push_byte(cycles, value, memory);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has B (bit 4) and bit 5 set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU, cycles: &mut Cycles, memory: &mut M) {
    cycles.consume(1);
    let status = cpu.status() | 0b0011_0000;
    cpu.push_byte(cycles, status, memory);
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Sets Z and N from the pulled value.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU, cycles: &mut Cycles, memory: &mut M) {
    cycles.consume(2);
    let value = cpu.pull_byte(cycles, memory);
    cpu.a = value;
    cpu.set_zn(value);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// B and bit 5 of the pulled byte are ignored.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU, cycles: &mut Cycles, memory: &mut M) {
    cycles.consume(2);
    let status = cpu.pull_byte(cycles, memory);
    cpu.restore_status(status);
}
