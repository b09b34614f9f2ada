//! Fuzz target for budgeted execution.
//!
//! Builds an arbitrary CPU state and memory image, runs `execute` with an
//! arbitrary budget and checks the budget and stack invariants afterwards.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{Memory, CPU};
use libfuzzer_sys::fuzz_target;

/// Longest instruction (BRK) minus one.
const MAX_OVERSHOOT: i64 = 6;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    /// Stack pointer low byte
    sp: u8,
    /// Packed NV-BDIZC status
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program at 0x8000
    program: [u8; 64],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Data region at 0x4000 for absolute addressing
    main_memory: [u8; 256],
    /// IRQ vector target
    irq_vector: u16,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    /// Kept small so one run stays fast; negative budgets are valid input
    budget: i16,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = Memory::new();

    // Reset vector points to 0x8000
    memory.load(0xFFFC, &[0x00, 0x80]);
    memory.load(0xFFFE, &input.memory.irq_vector.to_le_bytes());

    memory.load(0x8000, &input.memory.program);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let mut cpu = CPU::new();
    cpu.reset_from_vector(&memory);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let budget = input.budget as i64;
    let consumed = cpu.execute(budget, &mut memory);

    if budget <= 0 {
        assert_eq!(consumed, 0);
        assert_eq!(cpu.cycles(), 0);
    } else {
        assert!(consumed >= budget);
        assert!(consumed - budget <= MAX_OVERSHOOT);
        assert_eq!(cpu.cycles(), consumed as u64);
    }

    assert_eq!(cpu.sp() & 0xFF00, 0x0100);
});
