//! # 6502 CPU Core, One Tick at a Time
//!
//! A 6502 instruction-set emulator that advances in single clock ticks. Each
//! opcode is fetched, decoded through the opcode table and executed on one
//! tick; the cycles it is charged are then burned on the ticks that follow.
//! Pending NMI and IRQ latches are serviced whenever the CPU is idle.
//!
//! ## Quick Start
//!
//! ```rust
//! use step6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//!
//! // LDA #$01 / STA $0200
//! memory.load(0x0200, &[0xA9, 0x01, 0x8D, 0x00, 0x02]);
//!
//! // Reset vector points at the program
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x02); // High byte
//!
//! {
//!     // The CPU borrows the memory for the session
//!     let mut cpu = CPU::new(&mut memory);
//!     assert_eq!(cpu.pc(), 0x0200);
//!
//!     while cpu.pc() < 0x0205 {
//!         cpu.step();
//!     }
//!     assert_eq!(cpu.a(), 0x01);
//! }
//!
//! assert_eq!(memory.read(0x0200), 0x01);
//! ```
//!
//! ## Architecture
//!
//! - **Never halts**: every opcode byte runs; unassigned ones are free no-ops
//! - **No I/O, no clock**: the caller paces execution by calling `tick()`
//! - **Table-Driven Design**: one 256-entry table holds handler, addressing
//!   mode and cycle cost for every opcode
//! - **Wrapping arithmetic**: registers, PC and SP wrap; nothing traps
//!
//! ## Modules
//!
//! - `cpu` - CPU state, stack, interrupts and the tick engine
//! - `memory` - MemoryBus trait and FlatMemory
//! - `opcodes` - Opcode table and diagnostic names
//! - `addressing` - Addressing modes and operand resolution
//! - `flags` - Status register

pub mod addressing;
pub mod cpu;
pub mod flags;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

// WebAssembly bindings (optional)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use flags::Flags;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{opcode_name, Instruction, OpcodeMetadata, OPCODE_TABLE};
