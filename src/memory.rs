//! # Memory
//!
//! The core talks to memory only through `MemoryBus`: a byte read and a byte
//! write over a flat 16-bit address space. Every address is valid, so neither
//! call can fail.
//!
//! A CPU can own its bus or borrow one. Because `&mut M` is itself a
//! `MemoryBus`, `CPU::new(&mut memory)` runs against the caller's memory and
//! hands it back untouched by ownership when the CPU is dropped.

/// Byte-wide access to a 64KB address space.
///
/// # Examples
///
/// A bus that mirrors 2KB of RAM across the whole address space:
///
/// ```
/// use step6502::MemoryBus;
///
/// struct Mirrored {
///     ram: [u8; 0x0800],
/// }
///
/// impl MemoryBus for Mirrored {
///     fn read(&self, addr: u16) -> u8 {
///         self.ram[addr as usize & 0x07FF]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.ram[addr as usize & 0x07FF] = value;
///     }
/// }
///
/// let mut bus = Mirrored { ram: [0; 0x0800] };
/// bus.write(0x0010, 0x5A);
/// assert_eq!(bus.read(0x0810), 0x5A);
/// ```
pub trait MemoryBus {
    /// Returns the byte at `addr`.
    fn read(&self, addr: u16) -> u8;

    /// Stores `value` at `addr`. A bus may drop writes it does not back.
    fn write(&mut self, addr: u16, value: u8);
}

impl<M: MemoryBus + ?Sized> MemoryBus for &mut M {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

const MEMORY_SIZE: usize = 0x10000;

/// 64KB of plain RAM, zeroed on creation.
///
/// # Examples
///
/// ```
/// use step6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0xFFFC, &[0x00, 0x02]); // reset vector -> $0200
/// memory.load(0x0200, &[0xA9, 0x01]); // LDA #$01
///
/// let cpu = CPU::new(&mut memory);
/// assert_eq!(cpu.pc(), 0x0200);
/// ```
pub struct FlatMemory {
    bytes: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Copies `data` in starting at `start`, wrapping past 0xFFFF to 0x0000.
    pub fn load(&mut self, start: u16, data: &[u8]) {
        let mut addr = start;
        for &byte in data {
            self.bytes[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }
}
