//! WASM API for the 6502 simulator.
//!
//! Owns a CPU and its memory and exposes reset, loading, memory access,
//! cycle-budgeted execution and state inspection to JavaScript.

use crate::{Memory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// Main simulator interface for JavaScript
#[wasm_bindgen]
pub struct Simulator {
    cpu: CPU,
    memory: Memory,
}

#[wasm_bindgen]
impl Simulator {
    /// Create a simulator with zeroed memory and a reset CPU
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Simulator {
            cpu: CPU::new(),
            memory: Memory::new(),
        }
    }

    /// Reset the CPU; PC lands on 0xFFFC. Memory is kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Reset the CPU and take PC from the reset vector
    pub fn reset_from_vector(&mut self) {
        self.cpu.reset_from_vector(&self.memory);
    }

    /// Zero all of memory
    pub fn clear_memory(&mut self) {
        self.memory.initialise();
    }

    /// Copy a program into memory starting at `start_addr`
    pub fn load(&mut self, program: &[u8], start_addr: u16) {
        self.memory.load(start_addr, program);
    }

    /// Read a single byte from memory
    pub fn read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Write a single byte to memory
    pub fn write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256).map(|i| self.memory.read(start + i)).collect()
    }

    /// Run until `cycles` are used up and return the cycles actually consumed
    pub fn execute(&mut self, cycles: i32) -> i32 {
        self.cpu.execute(cycles as i64, &mut self.memory) as i32
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u16 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // JavaScript has no u64
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    // Register setters

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
