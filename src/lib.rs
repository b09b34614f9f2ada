//! # 6502 Instruction Set Simulator
//!
//! A cycle-budgeted NMOS 6502 simulator. The engine models the processor's
//! visible state (registers, flags, program counter, stack pointer) and runs
//! machine code from a flat 64KB memory, charging every bus transaction and
//! internal step against a cycle budget.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{Memory, CPU};
//!
//! let mut memory = Memory::new();
//!
//! // LDA $4402,X at the reset location
//! memory.load(0xFFFC, &[0xBD, 0x02, 0x44]);
//! memory[0x4501] = 0x37;
//!
//! let mut cpu = CPU::new();
//! cpu.reset();
//! cpu.set_x(0xFF);
//!
//! // 0x4402 + 0xFF crosses a page, so the load costs 5 cycles, not 4
//! assert_eq!(cpu.execute(4, &mut memory), 5);
//! assert_eq!(cpu.a(), 0x37);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: the engine is generic over the `MemoryBus` trait and only
//!   borrows memory for the duration of a call
//! - **Cycle Accounting**: a `Cycles` budget is threaded through every primitive
//! - **Table-Driven Design**: each opcode maps to an `Operation` and an
//!   `AddressingMode` in `OPCODE_TABLE`; dispatch is an exhaustive match
//! - **WebAssembly Portability**: no OS dependencies, deterministic execution
//!
//! ## Modules
//!
//! - `cpu` - CPU state, reset and the execute loop
//! - `cycles` - Cycle budget accounting
//! - `memory` - MemoryBus trait and the flat `Memory`
//! - `opcodes` - Opcode table and `Operation` enumeration
//! - `addressing` - Addressing modes and operand resolution

pub mod addressing;
pub mod cpu;
pub mod cycles;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use cpu::{CPU, IRQ_VECTOR, RESET_VECTOR, STACK_PAGE};
pub use cycles::Cycles;
pub use memory::{Memory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};

/// Errors that can occur while stepping the CPU.
///
/// `CPU::execute` never returns these; it logs them and keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched byte is not a documented opcode.
    ///
    /// The fetch cycle has been charged and PC has moved past the byte.
    UnknownOpcode {
        /// The offending byte.
        opcode: u8,
        /// Address it was fetched from.
        address: u16,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnknownOpcode { opcode, address } => {
                write!(f, "Instruction not handled: opcode 0x{:02X} at 0x{:04X}", opcode, address)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
