//! JavaScript-facing wrapper around a CPU that owns its memory.
//!
//! Provides JavaScript-callable interfaces for CPU control, interrupt lines
//! and state inspection. The emulator owns a flat 64KB memory.

use crate::cpu::RESET_VECTOR;
use crate::{opcode_name, FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// A CPU plus 64KB of RAM, driven from JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator with zeroed memory (PC starts at 0x0000)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(FlatMemory::new()),
        }
    }

    /// Copy a program into memory, point the reset vector at it and reset
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        let memory = self.cpu.memory_mut();
        memory.load(start_addr, program);
        memory.write(RESET_VECTOR, start_addr as u8);
        memory.write(RESET_VECTOR.wrapping_add(1), (start_addr >> 8) as u8);
        self.cpu.reset();
    }

    /// Reload PC from the reset vector
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Advance one clock cycle
    pub fn tick(&mut self) {
        self.cpu.tick();
    }

    /// Run one whole instruction and return the ticks it took
    pub fn step(&mut self) -> u32 {
        self.cpu.step() as u32
    }

    /// Tick `cycles` times
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        self.cpu.run_for_cycles(cycles as u64) as u32
    }

    /// Latch a non-maskable interrupt
    pub fn trigger_nmi(&mut self) {
        self.cpu.trigger_nmi();
    }

    /// Drive the IRQ latch
    pub fn set_irq(&mut self, pending: bool) {
        self.cpu.set_irq(pending);
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
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles_left(&self) -> u8 {
        self.cpu.cycles_left()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64
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

    /// Read a single byte
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Copy one 256-byte page into a JavaScript typed array
    pub fn memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let base = (page as u16) << 8;
        let bytes: Vec<u8> = (0..=0xFFu16)
            .map(|offset| self.cpu.memory().read(base | offset))
            .collect();
        js_sys::Uint8Array::from(bytes.as_slice())
    }

    /// Diagnostic label of the opcode at PC, empty if unassigned
    pub fn current_opcode_name(&self) -> String {
        opcode_name(self.cpu.memory().read(self.cpu.pc()))
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
