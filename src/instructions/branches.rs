//! # Branch Instructions
//!
//! All eight conditional branches share one routine; the dispatcher passes in
//! the flag condition.
//!
//! - BCC/BCS: carry clear/set
//! - BEQ/BNE: zero set/clear
//! - BMI/BPL: negative set/clear
//! - BVC/BVS: overflow clear/set
//!
//! # Cycle Timing
//!
//! - Not taken: 2 cycles (opcode + offset)
//! - Taken, same page: 3 cycles
//! - Taken, crossing a page: 4 cycles
//!
//! The offset is relative to the address after the branch instruction.

use crate::addressing::page_crossed;
use crate::{Cycles, Operand, CPU};

/// Branches by the relative offset in `operand` when `condition` holds.
pub(crate) fn branch_if(condition: bool, cpu: &mut CPU, operand: Operand, cycles: &mut Cycles) {
    let Operand::Relative(offset) = operand else {
        unreachable!("branches always resolve a relative offset");
    };

    if !condition {
        return;
    }

    cycles.consume(1);

    let old_pc = cpu.pc;
    let new_pc = old_pc.wrapping_add_signed(offset as i16);

    if page_crossed(old_pc, new_pc) {
        cycles.consume(1);
    }

    cpu.pc = new_pc;
}
