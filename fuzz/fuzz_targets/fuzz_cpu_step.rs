//! Fuzz target for CPU ticking.
//!
//! Builds an arbitrary machine state, memory contents and interrupt lines,
//! then ticks a bounded number of times. The core must never panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use step6502::{FlatMemory, MemoryBus, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    nmi: bool,
    irq: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the program start
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// NMI, reset and BRK vectors (0xFFFA-0xFFFF)
    vectors: [u8; 6],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    ticks: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x8000, &input.memory.program);
    memory.load(0xFFFA, &input.memory.vectors);

    let mut cpu = CPU::new(&mut memory);
    cpu.set_pc(0x8000);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);
    if input.cpu_state.nmi {
        cpu.trigger_nmi();
    }
    cpu.set_irq(input.cpu_state.irq);

    for _ in 0..input.ticks {
        let before = cpu.cycles_left();
        cpu.tick();
        if before > 0 {
            assert_eq!(cpu.cycles_left(), before - 1);
        }
    }

    assert_eq!(cpu.cycles(), input.ticks as u64);
});
