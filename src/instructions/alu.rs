//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Register compares
//! - BIT: Bit test
//!
//! ADC and SBC are binary only. The decimal flag is tracked but does not
//! switch to BCD arithmetic.

use crate::{Cycles, MemoryBus, Operand, CPU};

/// Adds `value` and the carry flag to the accumulator.
///
/// Shared by ADC and SBC (which adds the one's complement).
fn add_with_carry(cpu: &mut CPU, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.flag_c as u16;

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    cpu.flag_c = result16 > 0xFF;

    // Overflow: both inputs share a sign that the result does not
    cpu.flag_v = ((a ^ result) & (value ^ result) & 0x80) != 0;

    cpu.a = result;
    cpu.set_zn(result);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned result exceeds 0xFF
/// - Overflow (V): Set on signed overflow
/// - Zero (Z), Negative (N): From the result
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let value = cpu.operand_value(operand, cycles, memory);
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A - M - (1 - C). Carry is set when no borrow was needed.
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let value = cpu.operand_value(operand, cycles, memory);
    add_with_carry(cpu, !value);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let value = cpu.operand_value(operand, cycles, memory);
    cpu.a &= value;
    cpu.set_zn(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let value = cpu.operand_value(operand, cycles, memory);
    cpu.a |= value;
    cpu.set_zn(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let value = cpu.operand_value(operand, cycles, memory);
    cpu.a ^= value;
    cpu.set_zn(cpu.a);
}

/// Compares `register` with `value` the way CMP, CPX and CPY do.
///
/// - C: register >= value
/// - Z: register == value
/// - N: bit 7 of (register - value)
fn compare(cpu: &mut CPU, register: u8, value: u8) {
    cpu.flag_c = register >= value;
    cpu.set_zn(register.wrapping_sub(value));
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let value = cpu.operand_value(operand, cycles, memory);
    let register = cpu.a;
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let value = cpu.operand_value(operand, cycles, memory);
    let register = cpu.x;
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let value = cpu.operand_value(operand, cycles, memory);
    let register = cpu.y;
    compare(cpu, register, value);
}

/// Executes the BIT (Bit Test) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A & M = 0
/// - Negative (N): Bit 7 of M
/// - Overflow (V): Bit 6 of M
/// - The accumulator is not modified
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    let value = cpu.operand_value(operand, cycles, memory);
    cpu.flag_z = (cpu.a & value) == 0;
    cpu.flag_n = (value & 0x80) != 0;
    cpu.flag_v = (value & 0x40) != 0;
}
