//! Tests for the conditional branches.
//!
//! Covers:
//! - Each branch condition, taken and not taken
//! - Offsets added as unsigned values to the PC after the operand
//! - The offset byte read only when the branch is taken
//! - Constant 4-cycle charge (2 base + 2 extra)

use step6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn branch(opcode: u8, offset: u8, status: u8) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[opcode, offset]);
    cpu.set_status(status);
    cpu.step();
    cpu
}

const C: u8 = 0x01;
const Z: u8 = 0x02;
const V: u8 = 0x20;
const N: u8 = 0x40;

// ========== Conditions ==========

#[test]
fn test_branch_conditions() {
    // (opcode, status that takes the branch, status that does not)
    let cases = [
        (0x90, 0x00, C), // BCC
        (0xB0, C, 0x00), // BCS
        (0xF0, Z, 0x00), // BEQ
        (0xD0, 0x00, Z), // BNE
        (0x30, N, 0x00), // BMI
        (0x10, 0x00, N), // BPL
        (0x70, V, 0x00), // BVS
        (0x50, 0x00, V), // BVC
    ];

    for (opcode, taken, not_taken) in cases {
        let cpu = branch(opcode, 0x10, taken);
        assert_eq!(cpu.pc(), 0x8012, "opcode {:02X} taken", opcode);

        let cpu = branch(opcode, 0x10, not_taken);
        assert_eq!(cpu.pc(), 0x8001, "opcode {:02X} not taken", opcode);
    }
}

#[test]
fn test_branch_ignores_unrelated_flags() {
    // BEQ with everything but Z set
    let cpu = branch(0xF0, 0x10, 0xFF & !Z);
    assert_eq!(cpu.pc(), 0x8001);
}

// ========== Offsets ==========

#[test]
fn test_branch_offset_is_unsigned() {
    let cpu = branch(0xF0, 0xFE, Z);
    assert_eq!(cpu.pc(), 0x8100);
}

#[test]
fn test_branch_zero_offset() {
    let cpu = branch(0xF0, 0x00, Z);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_branch_wraps_address_space() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0xFFF0);
    cpu.memory_mut().load(0xFFF0, &[0xD0, 0x20]);

    cpu.step();
    assert_eq!(cpu.pc(), 0x0012);
}

#[test]
fn test_not_taken_branch_executes_offset_byte_next() {
    let mut cpu = setup_cpu();
    // BCS with C clear; the offset byte is INX
    cpu.memory_mut().load(0x8000, &[0xB0, 0xE8]);

    cpu.step();
    assert_eq!(cpu.pc(), 0x8001);

    cpu.tick();
    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.pc(), 0x8002);
}

// ========== Timing ==========

#[test]
fn test_branch_cycles_taken_and_not_taken() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB0, 0x10]);
    cpu.set_flag_c(true);
    assert_eq!(cpu.step(), 5);

    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB0, 0x10]);
    assert_eq!(cpu.step(), 5);
}

#[test]
fn test_branch_leaves_flags() {
    let cpu = branch(0x30, 0x10, N | C);
    assert_eq!(cpu.status(), N | C);
}
