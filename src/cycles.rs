//! # Cycle Accounting
//!
//! Every primitive the engine performs (a bus transaction or an internal step)
//! charges a fixed number of cycles against a [`Cycles`] budget. The budget is
//! threaded by mutable reference through the fetch unit, the addressing-mode
//! resolver and the operation functions, so there is exactly one place that
//! knows how much work an `execute` call has done.
//!
//! The rule is uniform:
//!
//! - each bus transaction (opcode fetch, operand fetch, data read, data write,
//!   stack push or pull) costs one cycle
//! - each internal step (index addition, page fix-up, read-modify-write modify
//!   step, implied execute step, stack pointer adjust, taken branch) costs one cycle
//!
//! Instruction totals fall out of the access pattern and match the documented
//! `base_cycles` in [`OPCODE_TABLE`](crate::OPCODE_TABLE).

/// Remaining cycle budget for one `execute` call.
///
/// The budget may go negative: an instruction that starts with budget left
/// always runs to completion, and the overshoot shows up as a negative
/// [`remaining`](Cycles::remaining) value.
///
/// # Examples
///
/// ```
/// use emu6502::Cycles;
///
/// let mut cycles = Cycles::new(3);
/// cycles.consume(2);
/// assert_eq!(cycles.remaining(), 1);
///
/// cycles.consume(2);
/// assert_eq!(cycles.remaining(), -1);
/// assert_eq!(cycles.consumed(), 4);
/// assert!(cycles.is_exhausted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycles {
    requested: i64,
    remaining: i64,
}

impl Cycles {
    /// Creates a budget of `requested` cycles.
    pub fn new(requested: i64) -> Self {
        Self {
            requested,
            remaining: requested,
        }
    }

    /// Charges `count` cycles against the budget.
    pub fn consume(&mut self, count: i64) {
        self.remaining -= count;
    }

    /// Cycles left in the budget. Negative after an overshoot.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Cycles charged since the budget was created.
    pub fn consumed(&self) -> i64 {
        self.requested - self.remaining
    }

    /// Returns true once no positive budget is left.
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }
}
