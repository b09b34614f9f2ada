//! Tests for the MemoryBus trait and the flat Memory.

use emu6502::{Cycles, Memory, MemoryBus, CPU, MEMORY_SIZE};
use std::cell::Cell;

#[test]
fn test_new_memory_is_zeroed() {
    let memory = Memory::new();

    assert!((0..MEMORY_SIZE).all(|addr| memory.read(addr as u16) == 0));
}

#[test]
fn test_read_write_full_address_range() {
    let mut memory = Memory::new();

    memory.write(0x0000, 0x11);
    memory.write(0x7FFF, 0x22);
    memory.write(0xFFFF, 0x33);

    assert_eq!(memory.read(0x0000), 0x11);
    assert_eq!(memory.read(0x7FFF), 0x22);
    assert_eq!(memory.read(0xFFFF), 0x33);
    assert_eq!(memory[0xFFFF], 0x33);
}

#[test]
fn test_initialise_zeroes_everything() {
    let mut memory = Memory::new();
    memory.load(0x1000, &[0xAA; 32]);
    memory[0xFFFF] = 0x55;

    memory.initialise();

    assert_eq!(memory.read(0x1000), 0);
    assert_eq!(memory.read(0x101F), 0);
    assert_eq!(memory.read(0xFFFF), 0);
}

#[test]
fn test_write_word_is_little_endian_and_costs_two_cycles() {
    let mut memory = Memory::new();
    let mut cycles = Cycles::new(10);

    memory.write_word(&mut cycles, 0x1234, 0x0200);

    assert_eq!(memory.read(0x0200), 0x34);
    assert_eq!(memory.read(0x0201), 0x12);
    assert_eq!(cycles.consumed(), 2);
    assert_eq!(cycles.remaining(), 8);
}

#[test]
fn test_write_word_wraps_at_top_of_memory() {
    let mut memory = Memory::new();
    let mut cycles = Cycles::new(2);

    memory.write_word(&mut cycles, 0xBEEF, 0xFFFF);

    assert_eq!(memory.read(0xFFFF), 0xEF);
    assert_eq!(memory.read(0x0000), 0xBE);
}

#[test]
fn test_load_wraps_at_top_of_memory() {
    let mut memory = Memory::new();

    memory.load(0xFFFE, &[0x01, 0x02, 0x03]);

    assert_eq!(memory.read(0xFFFE), 0x01);
    assert_eq!(memory.read(0xFFFF), 0x02);
    assert_eq!(memory.read(0x0000), 0x03);
}

/// Bus that counts every transaction, to check the CPU only talks to memory
/// through the trait.
struct CountingBus {
    inner: Memory,
    reads: Cell<usize>,
    writes: usize,
}

impl MemoryBus for CountingBus {
    fn read(&self, addr: u16) -> u8 {
        self.reads.set(self.reads.get() + 1);
        self.inner.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.writes += 1;
        self.inner.write(addr, value);
    }
}

#[test]
fn test_cpu_runs_on_custom_bus() {
    let mut inner = Memory::new();
    // LDA $1234 ; STA $2000
    inner.load(0x8000, &[0xAD, 0x34, 0x12, 0x8D, 0x00, 0x20]);
    inner.write(0x1234, 0x5A);

    let mut bus = CountingBus {
        inner,
        reads: Cell::new(0),
        writes: 0,
    };

    let mut cpu = CPU::new();
    cpu.set_pc(0x8000);
    let used = cpu.execute(8, &mut bus);

    assert_eq!(used, 8);
    assert_eq!(bus.inner.read(0x2000), 0x5A);
    // 6 instruction bytes + 1 data read
    assert_eq!(bus.reads.get(), 7);
    assert_eq!(bus.writes, 1);
}

#[test]
fn test_write_word_provided_method_uses_write() {
    let mut bus = CountingBus {
        inner: Memory::new(),
        reads: Cell::new(0),
        writes: 0,
    };
    let mut cycles = Cycles::new(2);

    bus.write_word(&mut cycles, 0xABCD, 0x0300);

    assert_eq!(bus.writes, 2);
    assert_eq!(bus.inner.read(0x0300), 0xCD);
    assert_eq!(bus.inner.read(0x0301), 0xAB);
}
