//! Tests for the ADC and SBC (Add/Subtract with Carry) instructions.
//!
//! Tests cover:
//! - Carry in and carry out
//! - Signed overflow in both directions
//! - Z and N
//! - Binary arithmetic even with the decimal flag set

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

/// Runs `opcode #operand` with the given accumulator and carry.
fn run_immediate(opcode: u8, a: u8, operand: u8, carry: bool) -> CPU {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[opcode, operand]);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    assert_eq!(step(&mut cpu, &mut memory), 2);
    cpu
}

// ========== ADC ==========

#[test]
fn test_adc_simple_addition() {
    let cpu = run_immediate(0x69, 0x50, 0x10, false);

    assert_eq!(cpu.a(), 0x60);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_adds_carry_in() {
    let cpu = run_immediate(0x69, 0x01, 0x01, true);

    assert_eq!(cpu.a(), 0x03);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_positive_overflow() {
    let cpu = run_immediate(0x69, 0x50, 0x50, false);

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_carry_out_and_zero() {
    let cpu = run_immediate(0x69, 0xFF, 0x01, false);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_negative_overflow() {
    let cpu = run_immediate(0x69, 0x80, 0xFF, false);

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_ignores_decimal_flag() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x69, 0x01]);
    cpu.set_a(0x09);
    cpu.set_flag_d(true);

    step(&mut cpu, &mut memory);

    assert_eq!(cpu.a(), 0x0A);
    assert!(cpu.flag_d());
}

#[test]
fn test_adc_zero_page() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x65, 0x10]);
    memory.write(0x0010, 0x22);
    cpu.set_a(0x11);

    assert_eq!(step(&mut cpu, &mut memory), 3);
    assert_eq!(cpu.a(), 0x33);
}

#[test]
fn test_adc_absolute_y_page_cross() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x79, 0xFF, 0x20]);
    memory.write(0x2100, 0x22);
    cpu.set_a(0x11);
    cpu.set_y(0x01);

    assert_eq!(step(&mut cpu, &mut memory), 5);
    assert_eq!(cpu.a(), 0x33);
}

// ========== SBC ==========

#[test]
fn test_sbc_simple_subtraction() {
    let cpu = run_immediate(0xE9, 0x50, 0x10, true);

    assert_eq!(cpu.a(), 0x40);
    assert!(cpu.flag_c()); // no borrow
    assert!(!cpu.flag_v());
}

#[test]
fn test_sbc_borrow_in() {
    let cpu = run_immediate(0xE9, 0x05, 0x02, false);

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_borrow_out() {
    let cpu = run_immediate(0xE9, 0x00, 0x01, true);

    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_equal_operands_give_zero() {
    let cpu = run_immediate(0xE9, 0x42, 0x42, true);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_overflow_negative_minus_positive() {
    let cpu = run_immediate(0xE9, 0x80, 0x01, true);

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_overflow_positive_minus_negative() {
    let cpu = run_immediate(0xE9, 0x50, 0xB0, true);

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(!cpu.flag_c());
}

#[test]
fn test_sbc_indirect_y() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xF1, 0x40]);
    memory.write(0x0040, 0x00);
    memory.write(0x0041, 0x30);
    memory.write(0x3003, 0x01);
    cpu.set_a(0x10);
    cpu.set_y(0x03);
    cpu.set_flag_c(true);

    assert_eq!(step(&mut cpu, &mut memory), 5);
    assert_eq!(cpu.a(), 0x0F);
}
