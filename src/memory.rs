//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the engine from a
//! specific memory implementation, and `Memory`, the flat 64KB array used by
//! drivers and tests.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - The address space is exactly 16 bits wide, so every address is valid
//! - Memory-mapped devices can implement the trait without engine changes

use std::ops::{Index, IndexMut};

use crate::Cycles;

/// Size of the 6502 address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Memory bus trait for the engine to read/write bytes.
///
/// The engine is generic over this trait and borrows the bus mutably for the
/// duration of each `execute` call.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// ## Implementing Custom Memory
///
/// ```
/// use emu6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Writes a 16-bit value little-endian at `addr` and `addr + 1`.
    ///
    /// The two bus transactions are charged against `cycles` here, at the
    /// point where they happen. The high byte address wraps at 0xFFFF.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{Cycles, Memory, MemoryBus};
    ///
    /// let mut mem = Memory::new();
    /// let mut cycles = Cycles::new(10);
    ///
    /// mem.write_word(&mut cycles, 0x1234, 0x0200);
    ///
    /// assert_eq!(mem.read(0x0200), 0x34);
    /// assert_eq!(mem.read(0x0201), 0x12);
    /// assert_eq!(cycles.remaining(), 8);
    /// ```
    fn write_word(&mut self, cycles: &mut Cycles, value: u16, addr: u16) {
        let [low, high] = value.to_le_bytes();
        self.write(addr, low);
        self.write(addr.wrapping_add(1), high);
        cycles.consume(2);
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous RAM
/// array initialized to 0x00.
///
/// # Examples
///
/// ```
/// use emu6502::{Memory, MemoryBus};
///
/// let mut memory = Memory::new();
/// memory[0xFFFC] = 0xA9; // LDA #$42
/// memory[0xFFFD] = 0x42;
///
/// assert_eq!(memory.read(0xFFFC), 0xA9);
/// ```
pub struct Memory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Creates a new Memory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Zero-fills the whole address space.
    pub fn initialise(&mut self) {
        self.data.fill(0);
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// Addresses wrap at 0xFFFF back to 0x0000, like every other access.
    ///
    /// ```
    /// use emu6502::{Memory, MemoryBus};
    ///
    /// let mut memory = Memory::new();
    /// memory.load(0xFFFF, &[0x11, 0x22]);
    ///
    /// assert_eq!(memory.read(0xFFFF), 0x11);
    /// assert_eq!(memory.read(0x0000), 0x22);
    /// ```
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Memory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

impl Index<u16> for Memory {
    type Output = u8;

    fn index(&self, addr: u16) -> &u8 {
        &self.data[addr as usize]
    }
}

impl IndexMut<u16> for Memory {
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.data[addr as usize]
    }
}
