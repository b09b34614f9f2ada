//! # Increment and Decrement Instructions
//!
//! - INC, DEC: Read-modify-write on memory
//! - INX, INY, DEX, DEY: Register forms, one internal cycle
//!
//! All of them wrap at the byte boundary and set only Z and N.

use super::effective_address;
use crate::{Cycles, MemoryBus, Operand, CPU};

fn modify_memory<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
    delta: i8,
) {
    let addr = effective_address(operand);
    let value = cpu.read_byte(cycles, addr, memory);
    cycles.consume(1);
    let result = value.wrapping_add_signed(delta);
    cpu.write_byte(cycles, addr, result, memory);
    cpu.set_zn(result);
}

/// Executes the INC (Increment Memory) instruction.
///
/// 0xFF wraps to 0x00 and sets Z.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    modify_memory(cpu, operand, cycles, memory, 1);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    modify_memory(cpu, operand, cycles, memory, -1);
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
}
