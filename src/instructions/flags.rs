//! # Flag Instructions
//!
//! Set or clear a single status flag. Each costs 2 cycles: the opcode fetch
//! and one internal cycle.

use crate::{Cycles, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.flag_c = false;
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.flag_c = true;
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.flag_i = false;
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.flag_i = true;
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.flag_d = false;
}

/// Executes the SED (Set Decimal Flag) instruction.
///
/// Arithmetic stays binary; the flag is only recorded.
pub(crate) fn execute_sed(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.flag_d = true;
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv(cpu: &mut CPU, cycles: &mut Cycles) {
    cycles.consume(1);
    cpu.flag_v = false;
}
