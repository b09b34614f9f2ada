//! # Shift and Rotate Instructions
//!
//! This module implements shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left
//! - ROR: Rotate Right
//!
//! Each works on the accumulator or on memory. The memory form is a
//! read-modify-write: read (1 cycle), modify (1 cycle), write (1 cycle).
//! The accumulator form costs one internal cycle.

use crate::{Cycles, MemoryBus, Operand, CPU};

/// Applies `op` to the operand and stores the result back where it came from.
///
/// `op` gets the incoming carry and the value, and returns the shifted value
/// and the new carry.
fn read_modify_write<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
    op: impl FnOnce(bool, u8) -> (u8, bool),
) {
    match operand {
        Operand::Accumulator => {
            cycles.consume(1);
            let (result, carry) = op(cpu.flag_c, cpu.a);
            cpu.a = result;
            cpu.flag_c = carry;
            cpu.set_zn(result);
        }
        other => {
            let addr = super::effective_address(other);
            let value = cpu.read_byte(cycles, addr, memory);
            // Modify step
            cycles.consume(1);
            let (result, carry) = op(cpu.flag_c, value);
            cpu.write_byte(cycles, addr, result, memory);
            cpu.flag_c = carry;
            cpu.set_zn(result);
        }
    }
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to carry, bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    read_modify_write(cpu, operand, cycles, memory, |_, value| {
        (value << 1, value & 0x80 != 0)
    });
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to carry, bit 7 becomes 0, so N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    read_modify_write(cpu, operand, cycles, memory, |_, value| {
        (value >> 1, value & 0x01 != 0)
    });
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Old carry enters bit 0, bit 7 leaves into carry.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    read_modify_write(cpu, operand, cycles, memory, |carry, value| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    });
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Old carry enters bit 7, bit 0 leaves into carry.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    read_modify_write(cpu, operand, cycles, memory, |carry, value| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    });
}
