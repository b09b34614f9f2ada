//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads touch only Z and N. Stores touch no flags.

use super::effective_address;
use crate::{Cycles, MemoryBus, Operand, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator, setting the zero and negative
/// flags as appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let value = cpu.operand_value(operand, cycles, memory);
    cpu.a = value;
    cpu.set_zn(value);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag behaviour as LDA, applied to X.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let value = cpu.operand_value(operand, cycles, memory);
    cpu.x = value;
    cpu.set_zn(value);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let value = cpu.operand_value(operand, cycles, memory);
    cpu.y = value;
    cpu.set_zn(value);
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Indexed stores always pay the fix-up cycle; the resolver has already
/// charged it because STA is a write access.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let addr = effective_address(operand);
    cpu.write_byte(cycles, addr, cpu.a, memory);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let addr = effective_address(operand);
    cpu.write_byte(cycles, addr, cpu.x, memory);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let addr = effective_address(operand);
    cpu.write_byte(cycles, addr, cpu.y, memory);
}
