//! Sample program example
//!
//! Runs the three-store sample program one instruction at a time and prints
//! the machine state at every instruction boundary.
//!
//! Run with `RUST_LOG=trace` to see each fetched opcode:
//!
//! ```text
//! RUST_LOG=trace cargo run --example sample_program
//! ```

use step6502::{FlatMemory, MemoryBus, CPU};

/// LDA #$01 / STA $0200 / LDA #$05 / STA $0201 / LDA #$08 / STA $0202
const PROGRAM: [u8; 15] = [
    0xA9, 0x01, 0x8D, 0x00, 0x02, 0xA9, 0x05, 0x8D, 0x01, 0x02, 0xA9, 0x08, 0x8D, 0x02, 0x02,
];

const PROGRAM_START: u16 = 0x0200;
const PROGRAM_END: u16 = PROGRAM_START + PROGRAM.len() as u16;

fn print_state<M: MemoryBus>(cpu: &CPU<M>) {
    println!(
        "A: ${:02X} X: ${:02X} Y: ${:02X} SP: ${:02X} PC: ${:04X} P: {:08b} Cycles left: {}",
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        cpu.pc(),
        cpu.status(),
        cpu.cycles_left()
    );
}

fn main() {
    env_logger::init();

    let mut memory = FlatMemory::new();
    memory.load(PROGRAM_START, &PROGRAM);
    memory.write(0xFFFC, PROGRAM_START as u8);
    memory.write(0xFFFD, (PROGRAM_START >> 8) as u8);

    {
        let mut cpu = CPU::new(&mut memory);
        print_state(&cpu);

        while cpu.pc() < PROGRAM_END {
            cpu.step();
            print_state(&cpu);
        }

        println!("Done after {} ticks.", cpu.cycles());
    }

    println!("Memory:");
    for addr in PROGRAM_START..PROGRAM_START + 3 {
        println!("At ${:04X}: {:02X}", addr, memory.read(addr));
    }
}
