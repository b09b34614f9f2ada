//! Tests for PHA, PHP, PLA and PLP.
//!
//! The stack grows upward within page one: a push stores at SP and then
//! advances it, a pull steps SP back and then reads.

use emu6502::{Cycles, Memory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> (CPU, Memory) {
    let mut memory = Memory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = CPU::new();
    cpu.reset_from_vector(&memory);
    (cpu, memory)
}

/// Executes one instruction and returns the cycles it took
fn step(cpu: &mut CPU, memory: &mut Memory) -> i64 {
    let mut cycles = Cycles::new(1);
    cpu.step(&mut cycles, memory).unwrap();
    cycles.consumed()
}

#[test]
fn test_pha() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x48]);
    cpu.set_a(0x42);

    assert_eq!(step(&mut cpu, &mut memory), 3);
    assert_eq!(memory.read(0x0100), 0x42);
    assert_eq!(cpu.sp(), 0x0101);
}

#[test]
fn test_pla() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x68]);
    memory.write(0x0100, 0x80);
    cpu.set_sp(0x01);

    assert_eq!(step(&mut cpu, &mut memory), 4);
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.sp(), 0x0100);
}

#[test]
fn test_pha_pla_round_trip() {
    let (mut cpu, mut memory) = setup_cpu();
    // PHA ; LDA #$00 ; PLA
    memory.load(0x8000, &[0x48, 0xA9, 0x00, 0x68]);
    cpu.set_a(0x37);

    assert_eq!(cpu.execute(9, &mut memory), 9);

    assert_eq!(cpu.a(), 0x37);
    assert!(!cpu.flag_z());
    assert_eq!(cpu.sp(), 0x0100);
}

#[test]
fn test_php_sets_break_and_unused_bits() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x08]);
    cpu.set_flag_c(true);

    assert_eq!(step(&mut cpu, &mut memory), 3);
    assert_eq!(memory.read(0x0100), 0b0011_0001);
    assert!(!cpu.flag_b());
}

#[test]
fn test_plp_restores_flags_except_break() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x28]);
    memory.write(0x0100, 0xFF);
    cpu.set_sp(0x01);

    assert_eq!(step(&mut cpu, &mut memory), 4);

    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_b());
    assert_eq!(cpu.sp(), 0x0100);
}

#[test]
fn test_php_plp_round_trip() {
    let (mut cpu, mut memory) = setup_cpu();
    // PHP ; CLC ; PLP
    memory.load(0x8000, &[0x08, 0x18, 0x28]);
    cpu.set_flag_c(true);
    cpu.set_flag_v(true);

    cpu.execute(9, &mut memory);

    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
}

#[test]
fn test_pull_from_empty_stack_wraps() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x68]);
    memory.write(0x01FF, 0x11);

    step(&mut cpu, &mut memory);

    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.sp(), 0x01FF);
}
